use crate::commands::{CmdMessage, CmdResult, WordlistInfo};
use crate::error::Result;
use crate::wordlist::WordlistStore;

/// Lists loaded wordlists and, separately, identifiers available to load.
pub fn run(store: &WordlistStore, available: &[String]) -> Result<CmdResult> {
    let loaded: Vec<WordlistInfo> = store
        .ids()
        .into_iter()
        .filter_map(|id| {
            store.get(id).map(|list| WordlistInfo {
                id: id.to_string(),
                size: list.len(),
            })
        })
        .collect();

    let mut result = CmdResult::default().with_wordlists(loaded);
    for id in available.iter().filter(|id| !store.contains(id)) {
        result.add_message(CmdMessage::info(format!("{} (not loaded)", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_loaded_wordlists_sorted() {
        let mut store = WordlistStore::with_builtin();
        store.put("de", "hund,katze,maus");
        let result = run(&store, &[]).unwrap();

        let ids: Vec<&str> = result.wordlists.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["de", "en"]);
        assert_eq!(result.wordlists[0].size, 3);
    }

    #[test]
    fn mentions_available_but_unloaded() {
        let store = WordlistStore::with_builtin();
        let available = vec!["en".to_string(), "fr".to_string()];
        let result = run(&store, &available).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "fr (not loaded)");
    }
}
