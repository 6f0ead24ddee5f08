mod create_project_request;
mod error;
