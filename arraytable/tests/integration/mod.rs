mod display_test;
mod growth_test;
mod mutation_test;
mod search_test;
mod sort_test;
