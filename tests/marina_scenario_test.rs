use anyhow::Result;
use marina::core::codec;
use marina::{
    BillingEngine, Boat, BoatStore, FileStore, LocationDetail, Repository, Session, MAX_BOATS,
};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// 讀取含壞資料列的檔案：只保留格式正確的船
#[test]
fn test_load_skips_malformed_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("boats.csv");
    fs::write(&path, "Eleanor,18,slip,29,230.00\nBadRow,abc,land,\n")?;

    let (repo, report) = FileStore::new(&path).load(MAX_BOATS)?;

    assert_eq!(repo.len(), 1);
    let eleanor = repo.find_by_name("Eleanor").expect("Eleanor should load");
    assert_eq!(eleanor.balance, 230.0);
    assert_eq!(eleanor.detail, LocationDetail::Slip(29));
    assert_eq!(report.skipped.len(), 1);
    Ok(())
}

/// 一整輪：載入、月結、付款、刪除、存檔、再載入
#[test]
fn test_full_session_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("boats.csv");
    fs::write(
        &path,
        "Big Brother,20,land,B,200.00\n\
         Moby,25,trailor,NXG221,0.00\n\
         Tubby,12,storage,115,1.50\n",
    )?;

    let store = FileStore::new(&path);
    let (repository, _) = store.load(MAX_BOATS)?;

    let mut session = Session::new("Boat Management System", repository, BillingEngine::default());
    let script = "m\np\nmoby\n625\nr\nTubby\na\nEleanor,40,slip,29,0.00\nx\n";
    let mut out = Vec::new();
    session.run(&mut Cursor::new(script), &mut out)?;
    store.save(session.repository())?;

    let saved = fs::read_to_string(&path)?;
    assert_eq!(
        saved,
        "Big Brother,20,land,B,480.00\n\
         Moby,25,trailor,NXG221,0.00\n\
         Eleanor,40,slip,29,0.00\n"
    );

    let (reloaded, report) = store.load(MAX_BOATS)?;
    assert!(report.skipped.is_empty());
    assert_eq!(reloaded.len(), 3);
    Ok(())
}

#[test]
fn test_missing_file_then_save_creates_it() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("new_marina.csv");

    let store = FileStore::new(&path);
    let (mut repository, _) = store.load(MAX_BOATS)?;
    assert!(repository.is_empty());

    repository.add(codec::decode_row("Dory,14,slip,3,0.00")?)?;
    store.save(&repository)?;

    assert_eq!(fs::read_to_string(&path)?, "Dory,14,slip,3,0.00\n");
    Ok(())
}

#[test]
fn test_capacity_from_config_limits_load() -> Result<()> {
    let rows: String = (1..=5)
        .map(|i| format!("Boat{},10,slip,{},0.00\n", i, i))
        .collect();
    let (repo, report) = Repository::load_all(rows.as_bytes(), 3)?;

    assert_eq!(repo.len(), 3);
    assert!(repo.is_full());
    assert!(report.truncated);
    assert!(repo.find_by_name("Boat4").is_none());
    Ok(())
}

#[test]
fn test_accrue_then_encode() -> Result<()> {
    let mut repo = Repository::default();
    repo.add(Boat::new("Alice", 40, LocationDetail::Slip(12), 0.0))?;

    BillingEngine::default().accrue_monthly_charges(&mut repo);

    let alice = repo.find_by_name("alice").expect("Alice present");
    assert_eq!(codec::encode_boat(alice), "Alice,40,slip,12,500.00");
    Ok(())
}
