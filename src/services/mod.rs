pub mod recipe_generation;
