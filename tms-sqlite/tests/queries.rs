mod common;

use common::{at, employee, organization, tender};
use tms_core::{
    models::{
        AuthorId, AuthorType, BidId, BidOrder, BidPatch, BidQuery, BidStatus, FeedbackId,
        FeedbackOrder, FeedbackQuery, Filter, NewBid, NewFeedback, Ordering, Page, TenderOrder,
        TenderPatch, TenderQuery, TenderServiceType, TenderStatus,
    },
    ports::{BidRepository as _, FeedbackRepository as _, TenderRepository as _},
};

#[tokio::test]
async fn tenders_filter_by_status_and_service_type() -> anyhow::Result<()> {
    let db = common::open().await?;
    let user = employee(&db, "user1").await?;
    let org = organization(&db, "Avito", &[&user]).await?;

    let c = tender(&db, "C", TenderServiceType::Delivery, &org, &user).await?;
    let a = tender(&db, "A", TenderServiceType::Construction, &org, &user).await?;
    let b = tender(&db, "B", TenderServiceType::Manufacture, &org, &user).await?;
    tender(&db, "D", TenderServiceType::Delivery, &org, &user).await?;

    for id in [a.id, b.id, c.id] {
        db.update_tender(
            id,
            TenderPatch {
                status: Some(TenderStatus::Published),
                ..Default::default()
            },
            at(2),
        )
        .await?;
    }

    let query = TenderQuery {
        status: Some(Filter::Eq(TenderStatus::Published)),
        service_type: Some(Filter::from(vec![
            TenderServiceType::Delivery,
            TenderServiceType::Construction,
        ])),
        ..Default::default()
    };
    let names: Vec<String> = db
        .query_tenders(&query, Some(Ordering::ascending(TenderOrder::Name)), Page::default())
        .await?
        .into_iter()
        .map(|tender| tender.name)
        .collect();
    assert_eq!(names, vec!["A", "C"]);

    let descending = db
        .query_tenders(
            &TenderQuery::default(),
            Some(Ordering::descending(TenderOrder::Name)),
            Page {
                limit: 2,
                offset: 1,
            },
        )
        .await?;
    let names: Vec<&str> = descending.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);

    Ok(())
}

#[tokio::test]
async fn empty_organization_sets_match_nothing() -> anyhow::Result<()> {
    let db = common::open().await?;
    let user = employee(&db, "user1").await?;
    let org = organization(&db, "Avito", &[&user]).await?;
    tender(&db, "A", TenderServiceType::Delivery, &org, &user).await?;

    let query = TenderQuery {
        organization_id: Some(Filter::In(Vec::new())),
        ..Default::default()
    };
    assert!(db.query_tenders(&query, None, Page::default()).await?.is_empty());

    let query = TenderQuery {
        organization_id: Some(Filter::In(vec![org.id])),
        ..Default::default()
    };
    assert_eq!(db.query_tenders(&query, None, Page::default()).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn bids_and_feedback_filter_by_tender_and_author() -> anyhow::Result<()> {
    let db = common::open().await?;
    let owner = employee(&db, "owner").await?;
    let bidder = employee(&db, "bidder").await?;
    let org = organization(&db, "Avito", &[&owner]).await?;
    let first = tender(&db, "First", TenderServiceType::Delivery, &org, &owner).await?;
    let second = tender(&db, "Second", TenderServiceType::Delivery, &org, &owner).await?;

    let mut bids = Vec::new();
    for (name, tender_id) in [("Z", first.id), ("Y", first.id), ("X", second.id)] {
        let bid = db
            .create_bid(
                BidId(uuid::Uuid::new_v4()),
                NewBid {
                    name: name.to_owned(),
                    description: String::new(),
                    tender_id,
                    author_type: AuthorType::User,
                    author_id: bidder.id.into(),
                },
                at(2),
            )
            .await?;
        bids.push(bid);
    }
    db.update_bid(
        bids[0].id,
        BidPatch {
            status: Some(BidStatus::Published),
            ..Default::default()
        },
        at(3),
    )
    .await?;

    let published_for_first = BidQuery {
        status: Some(Filter::Eq(BidStatus::Published)),
        tender_id: Some(Filter::Eq(first.id)),
        ..Default::default()
    };
    let found = db
        .query_bids(&published_for_first, Some(Ordering::ascending(BidOrder::Name)), Page::default())
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, bids[0].id);

    let by_author = BidQuery {
        author_id: Some(Filter::Eq(AuthorId::from(bidder.id))),
        ..Default::default()
    };
    let names: Vec<String> = db
        .query_bids(&by_author, Some(Ordering::ascending(BidOrder::Name)), Page::default())
        .await?
        .into_iter()
        .map(|bid| bid.name)
        .collect();
    assert_eq!(names, vec!["X", "Y", "Z"]);

    for (seconds, bid) in [(5, &bids[1]), (4, &bids[0]), (6, &bids[2])] {
        db.create_feedback(
            FeedbackId(uuid::Uuid::new_v4()),
            NewFeedback {
                bid_id: bid.id,
                description: format!("feedback on {}", bid.name),
                username: owner.username.clone(),
            },
            at(seconds),
        )
        .await?;
    }

    let on_first = FeedbackQuery {
        bid_id: Some(Filter::from(vec![bids[0].id, bids[1].id])),
    };
    let feedback: Vec<String> = db
        .query_feedback(
            &on_first,
            Some(Ordering::ascending(FeedbackOrder::CreatedAt)),
            Page::default(),
        )
        .await?
        .into_iter()
        .map(|feedback| feedback.description)
        .collect();
    assert_eq!(feedback, vec!["feedback on Z", "feedback on Y"]);

    Ok(())
}
