use common::entities::letter::{Letter, LetterStatus};
use mongodb::bson::{doc, oid::ObjectId, Document};

/// A dashboard mutation against a letter. `to_document` renders the fields
/// merged into the stored record, `apply` makes the same change to an
/// in-memory copy. Handlers persist first and patch the store's pre-image
/// afterwards, so a failed write patches nothing.
///
/// None of the variants read the current status before writing; repeating
/// an accept issues a second write with the same visible result.
pub enum LetterUpdate {
    Accept,
    Deliver,
    Assign {
        sponsor_id: ObjectId,
        sponsor_name: String,
    },
}

impl LetterUpdate {
    pub fn to_document(&self) -> Document {
        match self {
            LetterUpdate::Accept => doc! {"status": LetterStatus::Accepted.to_string()},
            LetterUpdate::Deliver => doc! {"status": LetterStatus::Delivered.to_string()},
            LetterUpdate::Assign {
                sponsor_id,
                sponsor_name,
            } => doc! {
                "status": LetterStatus::Accepted.to_string(),
                "sponsor_id": *sponsor_id,
                "sponsor_name": sponsor_name.clone(),
            },
        }
    }

    pub fn apply(self, letter: &mut Letter<ObjectId>) {
        match self {
            LetterUpdate::Accept => letter.status = LetterStatus::Accepted,
            LetterUpdate::Deliver => letter.status = LetterStatus::Delivered,
            LetterUpdate::Assign {
                sponsor_id,
                sponsor_name,
            } => {
                letter.status = LetterStatus::Accepted;
                letter.sponsor_id = Some(sponsor_id);
                letter.sponsor_name = Some(sponsor_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::entities::letter::{Letter, LetterStatus};
    use mongodb::bson::oid::ObjectId;

    use super::LetterUpdate;

    fn pending_letter() -> Letter<ObjectId> {
        Letter {
            id: ObjectId::new(),
            child_name: "Mia".to_string(),
            age: 5,
            category: "toys".to_string(),
            message: "I want a dollhouse".to_string(),
            location: "Toronto, Canada".to_string(),
            drawing_url: None,
            status: LetterStatus::Pending,
            sponsor_id: None,
            sponsor_name: None,
            created_at: 0,
            coordinates: None,
        }
    }

    #[test]
    fn test_document_and_reducer_agree() {
        let sponsor_id = ObjectId::new();
        let update = LetterUpdate::Assign {
            sponsor_id,
            sponsor_name: "ToyWorld".to_string(),
        };

        let document = update.to_document();
        assert_eq!(document.get_str("status").unwrap(), "accepted");
        assert_eq!(document.get_object_id("sponsor_id").unwrap(), sponsor_id);
        assert_eq!(document.get_str("sponsor_name").unwrap(), "ToyWorld");

        let mut letter = pending_letter();
        update.apply(&mut letter);
        assert_eq!(letter.status, LetterStatus::Accepted);
        assert_eq!(letter.sponsor_id, Some(sponsor_id));
        assert_eq!(letter.sponsor_name, Some("ToyWorld".to_string()));
    }

    #[test]
    fn test_accept_and_deliver_only_touch_status() {
        let mut letter = pending_letter();

        LetterUpdate::Accept.apply(&mut letter);
        assert_eq!(letter.status, LetterStatus::Accepted);
        assert_eq!(letter.sponsor_id, None);

        LetterUpdate::Deliver.apply(&mut letter);
        assert_eq!(letter.status, LetterStatus::Delivered);

        assert_eq!(
            LetterUpdate::Accept.to_document().get_str("status").unwrap(),
            "accepted"
        );
        assert_eq!(
            LetterUpdate::Deliver.to_document().get_str("status").unwrap(),
            "delivered"
        );
    }
}
