pub mod markup_builder;
