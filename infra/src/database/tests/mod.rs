mod movie_repository_tests;
mod select_builder_tests;
