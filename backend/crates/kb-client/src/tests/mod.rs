mod error;
mod retry;
