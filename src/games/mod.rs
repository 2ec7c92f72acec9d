//! Game implementations.

pub mod monty_hall;
