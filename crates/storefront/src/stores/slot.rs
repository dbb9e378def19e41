//! Persistent key-value bridge for client state.
//!
//! Wraps a per-profile directory of JSON slot files. The contract is
//! deliberately infallible: any load failure (missing file, unreadable
//! file, malformed JSON, version mismatch) yields an empty collection,
//! and any save failure is logged and dropped. The owning store must
//! stay usable when persistence is unavailable.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Version tag written into every slot payload. A payload carrying a
/// different version is discarded on load (upgrade-or-discard policy:
/// discard).
const SLOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, serde::Deserialize)]
struct Envelope<T> {
    version: u32,
    items: Vec<T>,
}

/// Bridge to the slot files of one client profile.
#[derive(Debug, Clone)]
pub struct SlotBridge {
    dir: PathBuf,
}

impl SlotBridge {
    /// Create a bridge rooted at the given profile directory. The
    /// directory is created lazily on first save.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Load the items stored in `slot`, or an empty vector when the
    /// slot is absent, unreadable, malformed, or from another version.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        let path = self.slot_path(slot);
        let Ok(bytes) = fs::read(&path) else {
            return Vec::new();
        };

        match serde_json::from_slice::<Envelope<T>>(&bytes) {
            Ok(envelope) if envelope.version == SLOT_VERSION => envelope.items,
            Ok(envelope) => {
                tracing::warn!(
                    slot,
                    version = envelope.version,
                    "discarding slot payload from another version"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(slot, error = %e, "discarding unreadable slot payload");
                Vec::new()
            }
        }
    }

    /// Write `items` to `slot`. Failures are logged and dropped.
    pub fn save<T: Serialize>(&self, slot: &str, items: &[T]) {
        let envelope = Envelope {
            version: SLOT_VERSION,
            items: items.iter().collect::<Vec<_>>(),
        };

        let bytes = match serde_json::to_vec(&envelope) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slot, error = %e, "failed to serialize slot payload");
                return;
            }
        };

        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(slot, error = %e, "failed to create slot directory");
            return;
        }

        if let Err(e) = fs::write(self.slot_path(slot), bytes) {
            tracing::warn!(slot, error = %e, "failed to write slot");
        }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Record {
        id: String,
        quantity: u32,
    }

    fn record(id: &str, quantity: u32) -> Record {
        Record {
            id: id.to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = SlotBridge::new(dir.path().to_path_buf());

        let items = vec![record("p1", 2), record("p2", 1)];
        bridge.save("keepanime_cart_v1", &items);

        let loaded: Vec<Record> = bridge.load("keepanime_cart_v1");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = SlotBridge::new(dir.path().to_path_buf());

        let loaded: Vec<Record> = bridge.load("keepanime_cart_v1");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keepanime_cart_v1.json"), b"{not json").unwrap();

        let bridge = SlotBridge::new(dir.path().to_path_buf());
        let loaded: Vec<Record> = bridge.load("keepanime_cart_v1");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_version_mismatch_discards() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("keepanime_cart_v1.json"),
            br#"{"version":2,"items":[{"id":"p1","quantity":1}]}"#,
        )
        .unwrap();

        let bridge = SlotBridge::new(dir.path().to_path_buf());
        let loaded: Vec<Record> = bridge.load("keepanime_cart_v1");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_slots_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = SlotBridge::new(dir.path().to_path_buf());

        bridge.save("keepanime_cart_v1", &[record("p1", 1)]);
        bridge.save("keepanime_wishlist_v1", &[record("p2", 1)]);

        let cart: Vec<Record> = bridge.load("keepanime_cart_v1");
        let wishlist: Vec<Record> = bridge.load("keepanime_wishlist_v1");
        assert_eq!(cart, vec![record("p1", 1)]);
        assert_eq!(wishlist, vec![record("p2", 1)]);
    }

    #[test]
    fn test_save_to_unwritable_directory_is_silent() {
        let bridge = SlotBridge::new(PathBuf::from("/dev/null/not-a-dir"));
        bridge.save("keepanime_cart_v1", &[record("p1", 1)]);

        let loaded: Vec<Record> = bridge.load("keepanime_cart_v1");
        assert!(loaded.is_empty());
    }
}
