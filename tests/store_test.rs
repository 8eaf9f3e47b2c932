use nowplayd::{store::CredentialStore, types::CredentialRecord};
use tempfile::TempDir;

#[tokio::test]
async fn connect_creates_the_store_directory() {
    let base = TempDir::new().unwrap();
    let dir = base.path().join("nested").join("store");

    CredentialStore::connect(dir.clone()).await.unwrap();

    assert!(dir.is_dir());
}

#[tokio::test]
async fn load_on_first_run_returns_none() {
    let base = TempDir::new().unwrap();
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();

    assert!(loaded.is_none());
}

#[tokio::test]
async fn save_then_load_returns_the_value() {
    let base = TempDir::new().unwrap();
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();

    store.save("rt-abc").await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some("rt-abc".to_string()));
}

#[tokio::test]
async fn saved_value_survives_a_reconnect() {
    let base = TempDir::new().unwrap();

    {
        let store = CredentialStore::connect(base.path().to_path_buf())
            .await
            .unwrap();
        store.save("rt-persisted").await.unwrap();
    }

    // A fresh handle over the same directory sees the record, like a
    // restarted process would.
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();
    assert_eq!(
        store.load().await.unwrap(),
        Some("rt-persisted".to_string())
    );
}

#[tokio::test]
async fn saving_twice_keeps_a_single_record_with_the_latest_value() {
    let base = TempDir::new().unwrap();
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();

    store.save("rt-first").await.unwrap();
    store.save("rt-second").await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some("rt-second".to_string()));

    // Upsert, not append: the store directory holds exactly one document.
    let entries = std::fs::read_dir(base.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn malformed_record_is_an_error() {
    let base = TempDir::new().unwrap();
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();

    std::fs::write(base.path().join("token.json"), "not json at all").unwrap();

    assert!(store.load().await.is_err());
}

#[tokio::test]
async fn foreign_record_id_is_treated_as_absent() {
    let base = TempDir::new().unwrap();
    let store = CredentialStore::connect(base.path().to_path_buf())
        .await
        .unwrap();

    let foreign = CredentialRecord {
        id: "someone-else".to_string(),
        refresh_token: "rt-foreign".to_string(),
    };
    std::fs::write(
        base.path().join("token.json"),
        serde_json::to_string(&foreign).unwrap(),
    )
    .unwrap();

    assert!(store.load().await.unwrap().is_none());
}
