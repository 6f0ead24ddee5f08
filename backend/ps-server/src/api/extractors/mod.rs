pub mod verified_claims;
