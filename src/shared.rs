use flate2::read::GzDecoder;
use std::fs::File;
use std::hash::BuildHasherDefault;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub type HashMap<A, B> = std::collections::HashMap<A, B, BuildHasherDefault<rustc_hash::FxHasher>>;

pub fn new_hash_map<A, B>() -> HashMap<A, B> {
    rustc_hash::FxHashMap::default()
}

/// Open a trip file for line-by-line reading. Paths ending in `.gz` are
/// decompressed on the fly.
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, io::Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
