pub mod calculator;
pub mod string_concepts;
