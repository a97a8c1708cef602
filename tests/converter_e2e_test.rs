// ==========================================
// Siparis Converter - end-to-end conversion tests
// ==========================================
// Whole pipeline over real files: parse -> project -> parallel
// supplier loads -> serialized aggregation -> report.
// ==========================================

mod test_helpers;

use siparis_converter::{
    Brand, BrandStatus, ConversionJob, JobConfig, Location,
};
use std::path::PathBuf;

fn job() -> ConversionJob {
    ConversionJob::new(JobConfig {
        run_month: Some(7),
        ..JobConfig::default()
    })
}

#[tokio::test]
async fn schaeffler_fuzzy_scenario_end_to_end() {
    siparis_converter::logging::init_test();

    let primary = test_helpers::primary_sheet();
    // catalogue code keeps its trailing zero (preceded by a digit) and
    // only fuzzy-matches the adjusted code ABC123
    let schaeffler = test_helpers::write_csv(
        "Catalogue number,PO Number(L),Ordered quantity",
        &["ABC1230,285-X,10"],
    );

    let (table, report) = job()
        .run(
            primary.path(),
            vec![(Brand::Schaeffler, schaeffler.path().to_path_buf())],
        )
        .await
        .expect("job");

    let record = &table.records[0];
    assert_eq!(record.adjusted_code, "ABC123");
    assert_eq!(record.location_balances.get(Location::Imes), 10.0);
    assert_eq!(record.total_balance, 10.0);

    // the other rows stay untouched
    for other in &table.records[1..] {
        assert_eq!(other.total_balance, 0.0);
    }

    assert_eq!(report.brands.len(), 1);
    assert_eq!(report.brands[0].status, BrandStatus::Processed);
    assert_eq!(report.brands[0].matched_groups, 1);
}

#[tokio::test]
async fn all_seven_brands_aggregate_into_their_rows() {
    let primary = test_helpers::primary_sheet();

    let schaeffler = test_helpers::write_csv(
        "Catalogue number,PO Number(L),Ordered quantity",
        &["LUK-ABC123,285-A,3", "LUK-ABC123,285-B,2"],
    );
    let zf_import = test_helpers::write_csv(
        "Material,Purchase order no.,Qty.in Del.,Open quantity",
        &["LF:555 01,285/77,3,2"],
    );
    let delphi = test_helpers::write_csv(
        "Material,Şube,Cum.qty",
        &["778899,Teknik Dizel-Ankara,7"],
    );
    let zf_domestic = test_helpers::write_csv(
        "Basic No.,Ship-to Name,Outstanding Quantity",
        &["555 01,İST MERKEZ DEPO,4"],
    );
    let valeo = test_helpers::write_csv(
        "Valeo Ref.,Müşteri P/O No.,Sipariş Adeti",
        &["VALE-826704,323-PO,6"],
    );
    let filtron = test_helpers::write_csv(
        "Malzeme Kodu,Müşteri SatınAlma No,Açık Sipariş Adedi",
        &["OP520,BAS-2,3"],
    );
    let mann = test_helpers::write_csv(
        "Malzeme Kodu,Müşteri SatınAlma No,Açık Sipariş Adedi",
        &["WK 842,DAS-1,2"],
    );

    let (table, report) = job()
        .run(
            primary.path(),
            vec![
                (Brand::Schaeffler, schaeffler.path().to_path_buf()),
                (Brand::ZfImport, zf_import.path().to_path_buf()),
                (Brand::Delphi, delphi.path().to_path_buf()),
                (Brand::ZfDomestic, zf_domestic.path().to_path_buf()),
                (Brand::Valeo, valeo.path().to_path_buf()),
                (Brand::Filtron, filtron.path().to_path_buf()),
                (Brand::Mann, mann.path().to_path_buf()),
            ],
        )
        .await
        .expect("job");

    assert_eq!(report.brands.len(), 7);
    for outcome in &report.brands {
        assert_eq!(
            outcome.status,
            BrandStatus::Processed,
            "brand {} should process",
            outcome.brand
        );
    }

    // Schaeffler: two rows dedup into one Imes group of 5
    assert_eq!(table.records[0].location_balances.get(Location::Imes), 5.0);
    // TRW row collects both ZF variants: import 3+2 at Imes, domestic 4 at Imes
    assert_eq!(table.records[1].location_balances.get(Location::Imes), 9.0);
    // Delphi branch rule routes to Ankara
    assert_eq!(
        table.records[2].location_balances.get(Location::Ankara),
        7.0
    );
    // Valeo generic rule: 323 -> Maslak
    assert_eq!(
        table.records[3].location_balances.get(Location::Maslak),
        6.0
    );
    // Mann short code DAS -> Imes
    assert_eq!(table.records[4].location_balances.get(Location::Imes), 2.0);
    // Filtron short code BAS -> Bolu
    assert_eq!(table.records[5].location_balances.get(Location::Bolu), 3.0);

    // invariant: totals equal the balance sums everywhere
    for record in &table.records {
        assert_eq!(record.total_balance, record.location_balances.sum());
    }

    // report serializes for the caller
    let json = report.to_json().expect("report json");
    assert!(json.contains("PROCESSED"));
}

#[tokio::test]
async fn unknown_location_rows_are_excluded_everywhere() {
    let primary = test_helpers::primary_sheet();
    let schaeffler = test_helpers::write_csv(
        "Catalogue number,PO Number(L),Ordered quantity",
        &["LUK-ABC123,WAREHOUSE-9,10"],
    );

    let (table, report) = job()
        .run(
            primary.path(),
            vec![(Brand::Schaeffler, schaeffler.path().to_path_buf())],
        )
        .await
        .expect("job");

    assert_eq!(report.brands[0].unclassified_rows, 1);
    for record in &table.records {
        assert_eq!(record.location_balances.sum(), 0.0);
        assert_eq!(record.total_balance, 0.0);
    }
}

#[tokio::test]
async fn missing_brand_file_skips_only_that_brand() {
    let primary = test_helpers::primary_sheet();
    let valeo = test_helpers::write_csv(
        "Valeo Ref.,Müşteri P/O No.,Sipariş Adeti",
        &["VALE-826704,ANK-55,4"],
    );

    let (table, report) = job()
        .run(
            primary.path(),
            vec![
                (Brand::Schaeffler, PathBuf::from("missing_schaeffler.xlsx")),
                (Brand::Valeo, valeo.path().to_path_buf()),
            ],
        )
        .await
        .expect("job completes despite a missing supplier file");

    assert_eq!(report.brands[0].status, BrandStatus::LoadFailed);
    assert_eq!(report.brands[1].status, BrandStatus::Processed);

    // Schaeffler row untouched, Valeo row aggregated
    assert_eq!(table.records[0].total_balance, 0.0);
    assert_eq!(
        table.records[3].location_balances.get(Location::Ankara),
        4.0
    );
}

#[tokio::test]
async fn brand_file_with_missing_columns_is_reported_not_fatal() {
    let primary = test_helpers::primary_sheet();
    let bogus = test_helpers::write_csv("Totally,Unrelated", &["a,b"]);

    let (_table, report) = job()
        .run(
            primary.path(),
            vec![(Brand::Delphi, bogus.path().to_path_buf())],
        )
        .await
        .expect("job");

    assert_eq!(report.brands[0].status, BrandStatus::MissingColumns);
    let detail = report.brands[0].detail.as_deref().unwrap_or("");
    assert!(detail.contains("Şube"));
}

#[tokio::test]
async fn repeated_aggregation_doubles_matched_balances() {
    let primary = test_helpers::primary_sheet();
    let valeo = test_helpers::write_csv(
        "Valeo Ref.,Müşteri P/O No.,Sipariş Adeti",
        &["VALE-826704,285-PO,6"],
    );

    let conversion = job();
    let (mut table, mut report) = conversion
        .run(
            primary.path(),
            vec![(Brand::Valeo, valeo.path().to_path_buf())],
        )
        .await
        .expect("job");

    assert_eq!(
        table.records[3].location_balances.get(Location::Imes),
        6.0
    );

    // a second pass over the same sheet keeps adding
    let rows = siparis_converter::importer::UniversalFileParser
        .parse(valeo.path())
        .expect("reparse");
    conversion.aggregate_loaded(&mut table, vec![(Brand::Valeo, Ok(rows))], &mut report);

    assert_eq!(
        table.records[3].location_balances.get(Location::Imes),
        12.0
    );
    assert_eq!(table.records[3].total_balance, 12.0);
}
