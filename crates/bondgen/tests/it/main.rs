mod cli;
mod generate;
mod utils;
