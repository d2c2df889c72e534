/*!
# Record writing

Generated splits are written as JSON lines, one file per split. See [JsonlWriter].
!*/
mod jsonl;
pub use jsonl::JsonlWriter;
