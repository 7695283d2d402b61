mod default;
mod integration;
mod statistics;
