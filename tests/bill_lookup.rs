use billsnap::prelude::*;

use insta;

const HR183: &str = "https://www.congress.gov/bill/113/house-bill/183";
const S5: &str = "https://www.congress.gov/bill/115/senate-bill/5";
const HR183_TEXT: &str = "https://www.congress.gov/113/bills/hr183/BILLS-113hr183rfs.xml";

/// Canned congress.gov pages for H.R.183 (113th Congress)
fn hr183_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with_page(HR183, include_str!("fixtures/hr183.html"))
        .with_page(
            format!("{}/summary", HR183),
            include_str!("fixtures/hr183_summary.html"),
        )
        .with_page(
            format!("{}/subjects", HR183),
            include_str!("fixtures/hr183_subjects.html"),
        )
        .with_page(
            format!("{}/cosponsors", HR183),
            include_str!("fixtures/hr183_cosponsors.html"),
        )
        .with_page(
            format!("{}/text", HR183),
            include_str!("fixtures/hr183_text.html"),
        )
        .with_page(
            format!("{}/actions", HR183),
            include_str!("fixtures/hr183_actions.html"),
        )
        .with_page(HR183_TEXT, include_str!("fixtures/BILLS-113hr183rfs.xml"))
}

/// A senate bill with no cosponsors, subjects, text rendition or votes yet
fn s5_fetcher() -> StaticFetcher {
    let overview = r#"<html><body>
        <h1 class="legDetail">S.5 - Example Senate Act<span>115th Congress (2017-2018)</span></h1>
        <a href="/member/jane-roe/R000001">Sen. Roe, Jane [D-XX]</a>
    </body></html>"#;

    StaticFetcher::new()
        .with_page(S5, overview)
        .with_page(
            format!("{}/cosponsors", S5),
            r#"<html><body><a href="/member/jane-roe/R000001">Sen. Roe, Jane [D-XX]</a><p>No cosponsors.</p></body></html>"#,
        )
        .with_page(format!("{}/subjects", S5), "<html><body><p>No subjects.</p></body></html>")
        .with_page(
            format!("{}/text", S5),
            r#"<html><body><p>Text has not been received for S.5.</p><a href="/help/text">Help</a></body></html>"#,
        )
        .with_page(
            format!("{}/summary", S5),
            "<html><body><p>A summary is in progress.</p></body></html>",
        )
        .with_page(
            format!("{}/actions", S5),
            r#"<html><body><a href="/committees">Read twice and referred</a></body></html>"#,
        )
}

fn open<'a>(fetcher: &'a StaticFetcher, chamber: &str, number: u32, congress: u32) -> Result<BillSnap<&'a StaticFetcher>> {
    BillSnap::with_fetcher(fetcher, &Config::default(), chamber, number, congress)
}

#[test]
fn test_construction_makes_one_request() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "House", 183, 113).unwrap();

    assert_eq!(bill.url(), HR183);
    assert_eq!(bill.id().chamber, Chamber::House);
    assert_eq!(fetcher.requests(), vec![HR183.to_string()]);
}

#[test]
fn test_invalid_input_fails_before_any_request() {
    let fetcher = hr183_fetcher();

    assert!(matches!(
        open(&fetcher, "assembly", 183, 113),
        Err(Error::InvalidChamber(_))
    ));
    assert!(matches!(
        open(&fetcher, "house", 183, 92),
        Err(Error::UnsupportedSession(92))
    ));
    assert!(matches!(
        open(&fetcher, "senate", 0, 115),
        Err(Error::InvalidBillNumber)
    ));
    assert_eq!(fetcher.request_count(), 0);
}

#[test]
fn test_missing_bill_is_reported() {
    let url = "https://www.congress.gov/bill/113/house-bill/99999";
    let fetcher = StaticFetcher::new().with_page(url, include_str!("fixtures/not_found.html"));

    match open(&fetcher, "house", 99999, 113) {
        Err(Error::BillNotFound(reported)) => assert_eq!(reported, url),
        other => panic!("expected BillNotFound, got {:?}", other.map(|b| b.url().to_string())),
    }
}

#[test]
fn test_title() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    assert_eq!(
        bill.title().unwrap().as_deref(),
        Some("Veterans Dog Training Therapy Act")
    );
}

#[test]
fn test_summary() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    assert_eq!(
        bill.summary().unwrap().as_deref(),
        Some("Veterans Dog Training Therapy Act - Directs the Secretary of Veterans Affairs to carry out a pilot program on dog training therapy.")
    );
}

#[test]
fn test_policy_areas() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();
    let areas = bill.policy_areas().unwrap();

    assert_eq!(areas.status, ListStatus::Found);
    assert_eq!(areas.items, vec!["Armed Forces and National Security"]);
}

#[test]
fn test_sponsor_and_cosponsors() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    assert_eq!(
        bill.sponsor().unwrap().as_deref(),
        Some("Rep. Grimm, Michael G. [R-NY-11]")
    );

    let cosponsors = bill.cosponsors().unwrap();
    assert_eq!(cosponsors.status, ListStatus::Found);
    assert_eq!(
        cosponsors.items,
        vec![
            "Rep. Walz, Timothy J. [D-MN-1]",
            "Rep. King, Peter T. [R-NY-2]",
            "Rep. Michaud, Michael H. [D-ME-2]",
        ]
    );
}

#[test]
fn test_cosponsors_look_up_sponsor_again() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();
    bill.cosponsors().unwrap();

    assert_eq!(
        fetcher.requests(),
        vec![
            HR183.to_string(),
            HR183.to_string(),
            format!("{}/cosponsors", HR183),
        ]
    );
}

#[test]
fn test_full_text_follows_rendition_link() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    assert_eq!(bill.full_text_link().unwrap().as_deref(), Some(HR183_TEXT));
    assert_eq!(
        bill.full_text().unwrap().as_deref(),
        Some(concat!(
            "1.Short titleThis Act may be cited as the Veterans Dog Training Therapy Act.",
            "2.Pilot program(a)The Secretary shall carry out a pilot program.",
            "(a)The Secretary shall carry out a pilot program.",
        ))
    );
}

#[test]
fn test_roll_call_detection() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    assert_eq!(bill.roll_call().unwrap(), Some(VoteFormat::HouseRollCall));
}

#[test]
fn test_bill_without_cosponsors() {
    let fetcher = s5_fetcher();
    let bill = open(&fetcher, "senate", 5, 115).unwrap();

    assert_eq!(bill.title().unwrap().as_deref(), Some("Example Senate Act"));

    let cosponsors = bill.cosponsors().unwrap();
    assert_eq!(cosponsors.status, ListStatus::NoMatches);
    assert!(cosponsors.items.is_empty());
}

#[test]
fn test_missing_rendition_skips_second_fetch() {
    let fetcher = s5_fetcher();
    let bill = open(&fetcher, "senate", 5, 115).unwrap();

    assert_eq!(bill.full_text().unwrap(), None);
    assert_eq!(
        fetcher.requests(),
        vec![S5.to_string(), format!("{}/text", S5)]
    );
}

#[test]
fn test_empty_pages_report_no_data() {
    let fetcher = s5_fetcher();
    let bill = open(&fetcher, "senate", 5, 115).unwrap();

    assert_eq!(bill.policy_areas().unwrap().status, ListStatus::NoData);
    assert_eq!(bill.summary().unwrap(), None);
    assert_eq!(bill.roll_call().unwrap(), None);
}

#[test]
fn test_every_request_derives_from_canonical_url() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();
    bill.record(false).unwrap();

    let requests = fetcher.requests();
    assert!(requests.len() > 1);
    for url in requests {
        assert!(url.starts_with(bill.url()), "{} does not start with {}", url, bill.url());
    }
}

#[test]
fn test_transport_errors_propagate() {
    let fetcher = StaticFetcher::new().with_page(HR183, include_str!("fixtures/hr183.html"));
    let bill = open(&fetcher, "house", 183, 113).unwrap();

    match bill.summary() {
        Err(Error::Status { url, status }) => {
            assert_eq!(status, 404);
            assert_eq!(url, format!("{}/summary", HR183));
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[test]
fn test_alternate_site_origin() {
    let config = ConfigBuilder::new()
        .base_url_str("http://localhost:8080/")
        .unwrap()
        .build()
        .unwrap();
    let fetcher = StaticFetcher::new()
        .with_page(
            "http://localhost:8080/bill/113/house-bill/183",
            include_str!("fixtures/hr183.html"),
        )
        .with_page(
            "http://localhost:8080/bill/113/house-bill/183/text",
            include_str!("fixtures/hr183_text.html"),
        );

    let bill = BillSnap::with_fetcher(&fetcher, &config, "house", 183, 113).unwrap();
    assert_eq!(bill.url(), "http://localhost:8080/bill/113/house-bill/183");
    assert_eq!(
        bill.full_text_link().unwrap().as_deref(),
        Some("http://localhost:8080/113/bills/hr183/BILLS-113hr183rfs.xml")
    );
}

#[test]
fn test_base_url_with_path_is_rejected() {
    let result = ConfigBuilder::new()
        .base_url_str("http://localhost:8080/mirror/")
        .unwrap()
        .build();

    assert!(matches!(result, Err(Error::Config(_))));
}

/// Snapshot of the full record for H.R.183
#[test]
fn test_record_snapshot() {
    let fetcher = hr183_fetcher();
    let bill = open(&fetcher, "house", 183, 113).unwrap();
    let record = bill.record(false).unwrap();

    let json_output =
        serde_json::to_string_pretty(&record).expect("Failed to serialize record to JSON");

    insta::assert_snapshot!(json_output, @r###"
    {
      "url": "https://www.congress.gov/bill/113/house-bill/183",
      "chamber": "house",
      "number": 183,
      "congress": 113,
      "title": "Veterans Dog Training Therapy Act",
      "summary": "Veterans Dog Training Therapy Act - Directs the Secretary of Veterans Affairs to carry out a pilot program on dog training therapy.",
      "policy_areas": {
        "status": "found",
        "items": [
          "Armed Forces and National Security"
        ]
      },
      "sponsor": "Rep. Grimm, Michael G. [R-NY-11]",
      "cosponsors": {
        "status": "found",
        "items": [
          "Rep. Walz, Timothy J. [D-MN-1]",
          "Rep. King, Peter T. [R-NY-2]",
          "Rep. Michaud, Michael H. [D-ME-2]"
        ]
      },
      "full_text_link": "https://www.congress.gov/113/bills/hr183/BILLS-113hr183rfs.xml",
      "roll_call": "house_roll_call"
    }
    "###);
}

/// Snapshot of the empty-state record for S.5
#[test]
fn test_empty_record_snapshot() {
    let fetcher = s5_fetcher();
    let bill = open(&fetcher, "senate", 5, 115).unwrap();
    let record = bill.record(true).unwrap();

    insta::assert_json_snapshot!(record, @r###"
    {
      "url": "https://www.congress.gov/bill/115/senate-bill/5",
      "chamber": "senate",
      "number": 5,
      "congress": 115,
      "title": "Example Senate Act",
      "summary": null,
      "policy_areas": {
        "status": "no_data",
        "items": []
      },
      "sponsor": "Sen. Roe, Jane [D-XX]",
      "cosponsors": {
        "status": "no_matches",
        "items": []
      },
      "full_text_link": null,
      "roll_call": null
    }
    "###);
}
