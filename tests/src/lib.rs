mod extension;
mod generator;
