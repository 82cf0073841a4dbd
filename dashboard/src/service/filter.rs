use common::entities::letter::{Letter, LetterStatus};
use mongodb::bson::oid::ObjectId;

/// Local filter applied to the full letter list. All three predicates must
/// hold; an absent predicate matches everything.
#[derive(Debug, Clone, Default)]
pub struct LetterFilter {
    pub category: Option<String>,
    pub status: Option<LetterStatus>,
    pub search: Option<String>,
}

impl LetterFilter {
    pub fn matches(&self, letter: &Letter<ObjectId>) -> bool {
        let matches_category = match &self.category {
            Some(category) => letter
                .category
                .to_lowercase()
                .contains(&category.to_lowercase()),
            None => true,
        };

        let matches_status = match &self.status {
            Some(status) => &letter.status == status,
            None => true,
        };

        let matches_search = match &self.search {
            Some(search) => {
                let search = search.to_lowercase();
                letter.child_name.to_lowercase().contains(&search)
                    || letter.location.to_lowercase().contains(&search)
            }
            None => true,
        };

        matches_category && matches_status && matches_search
    }

    /// Keeps the incoming order; the store already returns newest first.
    pub fn apply(&self, letters: Vec<Letter<ObjectId>>) -> Vec<Letter<ObjectId>> {
        letters
            .into_iter()
            .filter(|letter| self.matches(letter))
            .collect()
    }
}
