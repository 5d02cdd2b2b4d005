mod error;
mod workflow;
