/// This module provides the line-oriented delimited reader and writer.
pub mod delimited;

#[cfg(feature = "quote-aware")]
#[cfg_attr(docsrs, doc(cfg(feature = "quote-aware")))]
/// This module provides a quote-aware CSV reader.
pub mod csv;
