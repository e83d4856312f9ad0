pub mod categories;
pub mod run;
