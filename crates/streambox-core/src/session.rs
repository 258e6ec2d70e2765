use streambox_models::UserSession;
use crate::storage::{Storage, StorageError, USER_KEY};

pub fn load_session(storage: &Storage) -> Option<UserSession> {
    storage.get(USER_KEY)
}

pub fn save_session(storage: &Storage, session: &UserSession) -> Result<(), StorageError> {
    storage.save(USER_KEY, session)
}

pub fn clear_session(storage: &Storage) -> Result<(), StorageError> {
    storage.remove(USER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let storage = Storage::memory();
        let session = UserSession::new("Ada", "ada@example.com");

        save_session(&storage, &session).unwrap();
        assert_eq!(load_session(&storage), Some(session));

        clear_session(&storage).unwrap();
        assert_eq!(load_session(&storage), None);
        clear_session(&storage).unwrap();
    }
}
