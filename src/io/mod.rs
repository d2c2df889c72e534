/*!
# IO utilities

Loading of the raw dataset files and saving of the generated records.
!*/
pub mod reader;
pub mod writer;
