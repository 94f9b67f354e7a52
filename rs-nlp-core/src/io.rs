use std::fs;
use std::io;
use std::path::Path;

/// A text loaded from disk, named after its file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedText {
	pub name: String,
	pub text: String,
}

/// Loads every `.txt` file of `dir`, sorted by name.
///
/// The name of each text is its file stem (`data/article.txt` gives
/// `article`). Other files and sub-directories are ignored.
pub fn load_texts<P: AsRef<Path>>(dir: P) -> io::Result<Vec<NamedText>> {
	let mut texts = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
			continue;
		}
		let Some(stem) = path.file_stem() else {
			continue;
		};
		texts.push(NamedText { name: stem.to_string_lossy().into_owned(), text: fs::read_to_string(&path)? });
	}

	texts.sort_by(|a, b| a.name.cmp(&b.name));
	Ok(texts)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loads_only_text_files_in_name_order() {
		let dir = std::env::temp_dir().join(format!("rs-nlp-io-{}", std::process::id()));
		fs::create_dir_all(dir.join("nested.txt")).unwrap();
		fs::write(dir.join("b.txt"), "beta").unwrap();
		fs::write(dir.join("a.txt"), "alpha").unwrap();
		fs::write(dir.join("c.md"), "gamma").unwrap();

		let texts = load_texts(&dir).unwrap();
		fs::remove_dir_all(&dir).unwrap();

		assert_eq!(
			texts,
			vec![
				NamedText { name: "a".to_owned(), text: "alpha".to_owned() },
				NamedText { name: "b".to_owned(), text: "beta".to_owned() },
			]
		);
	}

	#[test]
	fn missing_directory_is_an_error() {
		assert!(load_texts("./does-not-exist-rs-nlp").is_err());
	}
}
