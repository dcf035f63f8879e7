//! Booking rollup: turns raw booking rows into per-customer aggregates and
//! the dashboard counters. Pure functions over in-memory rows; callers fetch
//! the rows (and the unread-message count) first and only invoke the rollup
//! once both reads have succeeded.

use app_schema::bookings::BookingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

/// Minimal booking projection consumed by the rollup. Price and guest count
/// are optional so legacy rows with NULLs fold in as zero instead of failing
/// the whole aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingRecord {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub total_price_dkk: Option<i64>,
    pub guest_count: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Per-unique-email booking history summary. Identity fields come from the
/// first booking seen for that email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAggregate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub booking_count: i64,
    pub total_spent: i64,
    pub last_booking: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub total_revenue: i64,
    pub total_guests: i64,
    pub unread_messages: i64,
}

/// Whole-kroner booking total: per-person price times guest count. No
/// rounding, no currency conversion.
pub fn booking_total(price_per_person_dkk: i64, guests: i32) -> i64 {
    price_per_person_dkk * i64::from(guests)
}

fn is_cancelled(status: &str) -> bool {
    status == BookingStatus::Cancelled.as_str()
}

fn price_of(booking: &BookingRecord) -> i64 {
    booking.total_price_dkk.unwrap_or(0).max(0)
}

fn guests_of(booking: &BookingRecord) -> i64 {
    i64::from(booking.guest_count.unwrap_or(0).max(0))
}

/// Groups bookings by customer email and returns one aggregate per unique
/// email, most recent `last_booking` first. Cancelled bookings count toward
/// `booking_count` but never toward `total_spent`. Rows without an email
/// cannot be keyed and are skipped.
pub fn aggregate_customers(bookings: &[BookingRecord]) -> Vec<CustomerAggregate> {
    let mut aggregates: Vec<CustomerAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for booking in bookings {
        if booking.customer_email.is_empty() {
            continue;
        }
        match index.get(&booking.customer_email) {
            Some(&at) => {
                let existing = &mut aggregates[at];
                existing.booking_count += 1;
                if !is_cancelled(&booking.status) {
                    existing.total_spent += price_of(booking);
                }
                if booking.created_at > existing.last_booking {
                    existing.last_booking = booking.created_at;
                }
            }
            None => {
                index.insert(booking.customer_email.clone(), aggregates.len());
                aggregates.push(CustomerAggregate {
                    customer_name: booking.customer_name.clone(),
                    customer_email: booking.customer_email.clone(),
                    customer_phone: booking.customer_phone.clone(),
                    booking_count: 1,
                    total_spent: if is_cancelled(&booking.status) {
                        0
                    } else {
                        price_of(booking)
                    },
                    last_booking: booking.created_at,
                });
            }
        }
    }

    // Stable sort: ties keep first-seen input order.
    aggregates.sort_by(|a, b| b.last_booking.cmp(&a.last_booking));
    aggregates
}

/// Single pass over all bookings. `unread_messages` comes from an
/// independent count query and is passed through unchanged.
pub fn dashboard_stats(bookings: &[BookingRecord], unread_messages: i64) -> DashboardStats {
    let mut stats = DashboardStats {
        total_bookings: 0,
        pending_bookings: 0,
        total_revenue: 0,
        total_guests: 0,
        unread_messages,
    };
    for booking in bookings {
        stats.total_bookings += 1;
        if booking.status == BookingStatus::Pending.as_str() {
            stats.pending_bookings += 1;
        }
        if !is_cancelled(&booking.status) {
            stats.total_revenue += price_of(booking);
            stats.total_guests += guests_of(booking);
        }
    }
    stats
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn at(iso_day: &str) -> DateTime<Utc> {
        let (y, m, d) = {
            let mut parts = iso_day.splitn(3, '-');
            (
                parts.next().unwrap().parse().unwrap(),
                parts.next().unwrap().parse().unwrap(),
                parts.next().unwrap().parse().unwrap(),
            )
        };
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn booking(email: &str, price: i64, guests: i32, status: &str, day: &str) -> BookingRecord {
        BookingRecord {
            customer_name: format!("Customer {email}"),
            customer_email: email.to_owned(),
            customer_phone: None,
            total_price_dkk: Some(price),
            guest_count: Some(guests),
            status: status.to_owned(),
            created_at: at(day),
        }
    }

    #[test]
    fn check_empty_input() {
        assert!(aggregate_customers(&[]).is_empty());
        let stats = dashboard_stats(&[], 3);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.pending_bookings, 0);
        assert_eq!(stats.total_revenue, 0);
        assert_eq!(stats.total_guests, 0);
        assert_eq!(stats.unread_messages, 3);
    }

    #[test]
    fn check_cancelled_excluded_from_money_but_counted() {
        // Concrete scenario: one confirmed, one cancelled, same customer.
        let bookings = vec![
            booking("a@x.com", 100, 2, "confirmed", "2025-01-01"),
            booking("a@x.com", 200, 1, "cancelled", "2025-02-01"),
        ];

        let customers = aggregate_customers(&bookings);
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].booking_count, 2);
        assert_eq!(customers[0].total_spent, 100);
        assert_eq!(customers[0].last_booking, at("2025-02-01"));

        let stats = dashboard_stats(&bookings, 0);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.pending_bookings, 0);
        assert_eq!(stats.total_revenue, 100);
        assert_eq!(stats.total_guests, 2);
    }

    #[test]
    fn check_first_cancelled_booking_starts_at_zero() {
        let bookings = vec![booking("a@x.com", 500, 4, "cancelled", "2025-03-01")];
        let customers = aggregate_customers(&bookings);
        assert_eq!(customers[0].booking_count, 1);
        assert_eq!(customers[0].total_spent, 0);
    }

    #[test]
    fn check_booking_count_conservation() {
        let bookings = vec![
            booking("a@x.com", 100, 1, "pending", "2025-01-01"),
            booking("b@x.com", 150, 2, "confirmed", "2025-01-02"),
            booking("a@x.com", 100, 1, "completed", "2025-01-03"),
            booking("c@x.com", 900, 5, "cancelled", "2025-01-04"),
        ];
        let customers = aggregate_customers(&bookings);
        let count_sum: i64 = customers.iter().map(|c| c.booking_count).sum();
        assert_eq!(count_sum, bookings.len() as i64);
        assert_eq!(dashboard_stats(&bookings, 0).total_bookings, 4);
    }

    #[test]
    fn check_sorted_by_last_booking_descending() {
        let bookings = vec![
            booking("old@x.com", 100, 1, "confirmed", "2024-05-01"),
            booking("new@x.com", 100, 1, "confirmed", "2025-06-01"),
            booking("mid@x.com", 100, 1, "confirmed", "2025-01-15"),
        ];
        let emails: Vec<String> = aggregate_customers(&bookings)
            .into_iter()
            .map(|c| c.customer_email)
            .collect();
        assert_eq!(emails, vec!["new@x.com", "mid@x.com", "old@x.com"]);
    }

    #[test]
    fn check_tied_last_booking_keeps_input_order() {
        let bookings = vec![
            booking("first@x.com", 100, 1, "confirmed", "2025-04-01"),
            booking("second@x.com", 100, 1, "confirmed", "2025-04-01"),
            booking("third@x.com", 100, 1, "confirmed", "2025-04-01"),
        ];
        let emails: Vec<String> = aggregate_customers(&bookings)
            .into_iter()
            .map(|c| c.customer_email)
            .collect();
        assert_eq!(emails, vec!["first@x.com", "second@x.com", "third@x.com"]);
    }

    #[test]
    fn check_identity_fields_from_first_seen() {
        let mut early = booking("a@x.com", 100, 1, "confirmed", "2025-01-01");
        early.customer_name = "Ane".to_owned();
        early.customer_phone = Some("+299 11 11 11".to_owned());
        let mut late = booking("a@x.com", 100, 1, "confirmed", "2025-02-01");
        late.customer_name = "A. Petersen".to_owned();
        late.customer_phone = None;

        let customers = aggregate_customers(&[early, late]);
        assert_eq!(customers[0].customer_name, "Ane");
        assert_eq!(customers[0].customer_phone.as_deref(), Some("+299 11 11 11"));
        assert_eq!(customers[0].last_booking, at("2025-02-01"));
    }

    #[test]
    fn check_permutation_invariant_totals() {
        let a = booking("a@x.com", 100, 1, "pending", "2025-01-01");
        let b = booking("b@x.com", 250, 3, "confirmed", "2025-01-02");
        let c = booking("a@x.com", 400, 2, "cancelled", "2025-01-03");

        let forward = aggregate_customers(&[a.clone(), b.clone(), c.clone()]);
        let backward = aggregate_customers(&[c, b, a]);

        for customers in [&forward, &backward] {
            let a_agg = customers
                .iter()
                .find(|x| x.customer_email == "a@x.com")
                .unwrap();
            assert_eq!(a_agg.booking_count, 2);
            assert_eq!(a_agg.total_spent, 100);
            assert_eq!(a_agg.last_booking, at("2025-01-03"));
        }
    }

    #[test]
    fn check_idempotence() {
        let bookings = vec![
            booking("a@x.com", 100, 1, "pending", "2025-01-01"),
            booking("b@x.com", 250, 3, "confirmed", "2025-01-02"),
        ];
        assert_eq!(aggregate_customers(&bookings), aggregate_customers(&bookings));
        assert_eq!(dashboard_stats(&bookings, 7), dashboard_stats(&bookings, 7));
    }

    #[test]
    fn check_missing_email_skipped_in_customers_counted_in_stats() {
        let anonymous = booking("", 300, 2, "confirmed", "2025-01-01");
        let bookings = vec![anonymous, booking("a@x.com", 100, 1, "pending", "2025-01-02")];

        let customers = aggregate_customers(&bookings);
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_email, "a@x.com");

        let stats = dashboard_stats(&bookings, 0);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, 400);
        assert_eq!(stats.total_guests, 3);
    }

    #[test]
    fn check_email_match_is_case_sensitive() {
        let bookings = vec![
            booking("A@x.com", 100, 1, "confirmed", "2025-01-01"),
            booking("a@x.com", 100, 1, "confirmed", "2025-01-02"),
        ];
        assert_eq!(aggregate_customers(&bookings).len(), 2);
    }

    #[test]
    fn check_null_and_negative_amounts_fold_as_zero() {
        let mut no_price = booking("a@x.com", 0, 2, "confirmed", "2025-01-01");
        no_price.total_price_dkk = None;
        let negative = booking("a@x.com", -50, -3, "confirmed", "2025-01-02");

        let bookings = vec![no_price, negative];
        let customers = aggregate_customers(&bookings);
        assert_eq!(customers[0].total_spent, 0);

        let stats = dashboard_stats(&bookings, 0);
        assert_eq!(stats.total_revenue, 0);
        assert_eq!(stats.total_guests, 2);
    }

    #[test]
    fn check_pending_count() {
        let bookings = vec![
            booking("a@x.com", 100, 1, "pending", "2025-01-01"),
            booking("b@x.com", 100, 1, "pending", "2025-01-02"),
            booking("c@x.com", 100, 1, "confirmed", "2025-01-03"),
            booking("d@x.com", 100, 1, "cancelled", "2025-01-04"),
        ];
        let stats = dashboard_stats(&bookings, 0);
        assert_eq!(stats.pending_bookings, 2);
        assert_eq!(stats.total_bookings, 4);
        assert_eq!(stats.total_revenue, 300);
    }

    #[test]
    fn check_booking_total() {
        assert_eq!(booking_total(1495, 2), 2990);
        assert_eq!(booking_total(895, 1), 895);
        assert_eq!(booking_total(0, 7), 0);
    }

    #[test]
    fn check_stats_serialize_camel_case() {
        let stats = dashboard_stats(&[], 5);
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("totalBookings").is_some());
        assert!(json.get("pendingBookings").is_some());
        assert!(json.get("totalRevenue").is_some());
        assert!(json.get("totalGuests").is_some());
        assert_eq!(json.get("unreadMessages").unwrap(), 5);
    }
}
