use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads a whole corpus file as UTF-8 text.
///
/// Unlike line-based readers, line terminators are kept: they are
/// characters of the corpus like any other.
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	BufReader::new(File::open(filename)?).read_to_string(&mut contents)?;
	Ok(contents)
}
