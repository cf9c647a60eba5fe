mod extension;
mod grid;
