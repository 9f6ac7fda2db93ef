use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static DICT_DIR: Dir = include_dir!("dictionaries");

/// A word list loaded once per process and read-only thereafter.
#[derive(Deserialize, Clone, Debug)]
pub struct Dictionary {
    pub words: Vec<String>,
}

/// A named bundle of dictionary ids, used by the `list` and `search` commands.
#[derive(Deserialize, Clone, Debug)]
pub struct DictionaryGroup {
    pub name: String,
    pub dictionaries: Vec<String>,
}

impl Dictionary {
    /// Load an embedded dictionary by id (e.g. "english").
    ///
    /// Fails when the backing file is missing, is not valid dictionary json,
    /// or contains no words. All of these are configuration errors detected
    /// before the interactive loop starts.
    pub fn load(id: &str) -> Result<Self, Box<dyn Error>> {
        let file_name = format!("{id}.json");
        let file = DICT_DIR
            .get_file(&file_name)
            .ok_or_else(|| format!("dictionary '{id}' not found"))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| format!("dictionary file {file_name} is not valid utf-8"))?;

        let dict: Dictionary = from_str(contents)
            .map_err(|e| format!("invalid format in {file_name}: {e}"))?;

        if dict.words.is_empty() {
            return Err(format!("dictionary '{id}' contains no words").into());
        }

        Ok(dict)
    }
}

/// Load the group metadata shipped alongside the dictionaries.
pub fn load_groups() -> Result<Vec<DictionaryGroup>, Box<dyn Error>> {
    let file = DICT_DIR
        .get_file("_groups.json")
        .ok_or("dictionary group index (_groups.json) not found")?;

    let contents = file
        .contents_utf8()
        .ok_or("_groups.json is not valid utf-8")?;

    let groups = from_str(contents).map_err(|e| format!("invalid format in _groups.json: {e}"))?;

    Ok(groups)
}

/// Case-insensitive substring search over all dictionary ids.
pub fn search(query: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let needle = query.to_lowercase();
    let mut found = Vec::new();

    for group in load_groups()? {
        for id in group.dictionaries {
            if id.to_lowercase().contains(&needle) {
                found.push(id);
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_english() {
        let dict = Dictionary::load("english").unwrap();

        assert!(!dict.words.is_empty());
        assert!(dict.words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_load_all_listed_dictionaries() {
        // Every id referenced by the group index must resolve to a loadable file
        for group in load_groups().unwrap() {
            for id in &group.dictionaries {
                let dict = Dictionary::load(id)
                    .unwrap_or_else(|e| panic!("dictionary '{id}' failed to load: {e}"));
                assert!(!dict.words.is_empty(), "dictionary '{id}' is empty");
            }
        }
    }

    #[test]
    fn test_words_have_no_embedded_whitespace() {
        // Words are joined by single spaces to form the target, so none may
        // contain whitespace of their own
        for group in load_groups().unwrap() {
            for id in &group.dictionaries {
                let dict = Dictionary::load(id).unwrap();
                assert!(
                    dict.words.iter().all(|w| !w.contains(char::is_whitespace)),
                    "dictionary '{id}' has a word with embedded whitespace"
                );
            }
        }
    }

    #[test]
    fn test_load_missing_dictionary() {
        let err = Dictionary::load("klingon").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_dictionary_deserialization() {
        let json_data = r#"{ "words": ["hello", "world", "test"] }"#;

        let dict: Dictionary = from_str(json_data).unwrap();

        assert_eq!(dict.words.len(), 3);
        assert!(dict.words.contains(&"hello".to_string()));
    }

    #[test]
    fn test_invalid_dictionary_json_is_rejected() {
        let json_data = r#"{ "vocabulary": ["hello"] }"#;

        let result: Result<Dictionary, _> = from_str(json_data);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_groups() {
        let groups = load_groups().unwrap();

        assert!(!groups.is_empty());
        assert!(groups.iter().any(|g| g.name == "English"));
        assert!(groups.iter().all(|g| !g.dictionaries.is_empty()));
    }

    #[test]
    fn test_search_case_insensitive() {
        let found = search("ENGLISH").unwrap();

        assert!(found.contains(&"english".to_string()));
        assert!(found.contains(&"english_advanced".to_string()));
    }

    #[test]
    fn test_search_substring() {
        let found = search("advanc").unwrap();
        assert_eq!(found, vec!["english_advanced".to_string()]);
    }

    #[test]
    fn test_search_no_match() {
        let found = search("esperanto").unwrap();
        assert!(found.is_empty());
    }
}
