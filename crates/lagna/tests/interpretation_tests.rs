use async_trait::async_trait;
use lagna::interpretation::{ASCENDANT_PLACEHOLDER, HOUSE_PLACEHOLDER};
use lagna::{
    BirthChart, BirthMoment, DocumentStore, GeoCoordinate, HoroscopeCalculator,
    InterpretationLookup, InterpretationRecord, InterpretationStore, StoreError,
};
use std::sync::Arc;
use std::time::Duration;

const SAMPLE_STORE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/interpretations.json");

fn bangkok_chart() -> BirthChart {
    HoroscopeCalculator::default()
        .calculate_chart(
            &BirthMoment::from_ymd_hms(1990, 3, 15, 14, 30, 0).unwrap(),
            GeoCoordinate::BANGKOK,
        )
        .unwrap()
}

struct FailingStore;

#[async_trait]
impl InterpretationStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn find_by_sign(&self, _sign_name: &str) -> Result<InterpretationRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_house(&self, _house_number: u8) -> Result<InterpretationRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

struct SlowStore(Duration);

#[async_trait]
impl InterpretationStore for SlowStore {
    fn name(&self) -> &str {
        "slow"
    }

    async fn find_by_sign(&self, _sign_name: &str) -> Result<InterpretationRecord, StoreError> {
        tokio::time::sleep(self.0).await;
        Ok(InterpretationRecord::new("too late"))
    }

    async fn find_by_house(&self, _house_number: u8) -> Result<InterpretationRecord, StoreError> {
        tokio::time::sleep(self.0).await;
        Ok(InterpretationRecord::new("too late"))
    }
}

#[tokio::test]
async fn test_offline_lookup_uses_placeholders() {
    let chart = bangkok_chart();
    let lookup = InterpretationLookup::offline();

    assert_eq!(
        lookup.ascendant_text(&chart.ascendant).await,
        format!("{ASCENDANT_PLACEHOLDER} (องศา 21.8° ในราศีกุมภ์) เป็นราศีธาตุลม และมีคุณภาพFixed")
    );
    assert_eq!(
        lookup.house_text(chart.houses.get(3).unwrap()).await,
        format!("บ้านที่ 3 ({HOUSE_PLACEHOLDER}): ราศีเมษ องศา 21.8°")
    );
}

#[tokio::test]
async fn test_sample_store_texts() {
    let store = DocumentStore::load(SAMPLE_STORE).await.unwrap();
    let lookup = InterpretationLookup::new(Arc::new(store));
    let chart = bangkok_chart();

    assert_eq!(
        lookup.ascendant_text(&chart.ascendant).await,
        "ลัคนาราศีกุมภ์มักมีความคิดก้าวหน้า เป็นตัวของตัวเอง และรักเพื่อนฝูง (องศา 21.8° ในราศีกุมภ์) เป็นราศีธาตุลม และมีคุณภาพFixed"
    );
    assert_eq!(
        lookup.house_text(chart.houses.first()).await,
        "บ้านที่ 1 (ตัวตนและบุคลิกภาพ): ราศีกุมภ์ องศา 21.8°"
    );
    assert_eq!(
        lookup.house_text(chart.houses.get(2).unwrap()).await,
        "บ้านที่ 2 (การเงินและทรัพย์สิน): ราศีมีน องศา 21.8°"
    );
    assert_eq!(
        lookup.house_text(chart.houses.get(12).unwrap()).await,
        "บ้านที่ 12 (จิตใต้สำนึกและสิ่งที่ซ่อนเร้น): ราศีมังกร องศา 21.8°"
    );
}

#[tokio::test]
async fn test_sample_store_covers_every_sign_and_house() {
    let store = DocumentStore::load(SAMPLE_STORE).await.unwrap();
    for sign in lagna::ZODIAC_SIGNS.iter() {
        let record = store.find_by_sign(sign.name).await.unwrap();
        assert!(record.into_text().is_some(), "no text for {}", sign.name);
    }
    for house in 1..=12 {
        let record = store.find_by_house(house).await.unwrap();
        assert!(record.into_text().is_some(), "no meaning for house {house}");
    }
}

#[tokio::test]
async fn test_failing_store_degrades_to_placeholder() {
    let chart = bangkok_chart();
    let lookup = InterpretationLookup::new(Arc::new(FailingStore));
    let offline = InterpretationLookup::offline();

    assert_eq!(
        lookup.ascendant_text(&chart.ascendant).await,
        offline.ascendant_text(&chart.ascendant).await
    );
    assert_eq!(
        lookup.house_text(chart.houses.first()).await,
        offline.house_text(chart.houses.first()).await
    );
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let chart = bangkok_chart();
    let lookup = InterpretationLookup::new(Arc::new(SlowStore(Duration::from_secs(30))))
        .with_timeout(Duration::from_millis(50));

    let text = lookup.ascendant_text(&chart.ascendant).await;
    assert!(text.starts_with(ASCENDANT_PLACEHOLDER));
    let text = lookup.house_text(chart.houses.get(5).unwrap()).await;
    assert!(text.contains(HOUSE_PLACEHOLDER));
}

#[tokio::test]
async fn test_missing_results_have_fixed_messages() {
    let lookup = InterpretationLookup::offline();
    assert_eq!(lookup.describe_ascendant(None).await, "ไม่สามารถคำนวณ Ascendant ได้");
    assert_eq!(lookup.describe_house(4, None).await, "ไม่สามารถคำนวณบ้านที่ 4 ได้");

    let chart = bangkok_chart();
    assert_eq!(
        lookup.describe_ascendant(Some(&chart.ascendant)).await,
        lookup.ascendant_text(&chart.ascendant).await
    );
}

#[tokio::test]
async fn test_read_chart_covers_all_houses() {
    let store = DocumentStore::load(SAMPLE_STORE).await.unwrap();
    let lookup = InterpretationLookup::new(Arc::new(store));
    let reading = lookup.read_chart(&bangkok_chart()).await;

    assert_eq!(reading.houses.len(), 12);
    assert_eq!(reading.houses.keys().copied().collect::<Vec<_>>(), (1..=12).collect::<Vec<u8>>());
    assert!(reading.houses[&7].starts_with("บ้านที่ 7 ("));
    assert_eq!(reading.lines().count(), 13);
    assert_eq!(reading.lines().next(), Some(reading.ascendant.as_str()));
}

#[tokio::test]
async fn test_lookup_runs_on_spawned_tasks() {
    let lookup = InterpretationLookup::offline();
    let chart = bangkok_chart();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lookup = lookup.clone();
            let chart = chart.clone();
            tokio::spawn(async move { lookup.read_chart(&chart).await })
        })
        .collect();

    let expected = lookup.read_chart(&chart).await;
    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
