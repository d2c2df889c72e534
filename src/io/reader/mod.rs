/*! Reading utilities

- [side_table]: positional lookup tables.
- [delimited]: header-bearing tab or pipe separated files.
- [lines]: plain line files.
!*/
pub mod delimited;
pub mod lines;
pub mod side_table;

pub use delimited::Dialect;
pub use side_table::{LookupRow, SideTable};
