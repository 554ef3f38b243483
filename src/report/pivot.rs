use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::report::schema::Transaction;

/// How clients are ordered inside a region sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ClientOrder {
    /// Lexicographic by client name.
    #[default]
    Sorted,
    /// In the order clients first appear in the input.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTotal {
    pub client: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPivot {
    pub region: String,
    pub clients: Vec<ClientTotal>,
    pub total: f64,
}

/// Groups transactions by region (first-occurrence order) and sums amounts per client.
pub fn pivot_by_region(transactions: &[Transaction], order: ClientOrder) -> Vec<RegionPivot> {
    let mut regions: IndexMap<&str, IndexMap<&str, f64>> = IndexMap::new();

    for tx in transactions {
        let clients = regions.entry(tx.region()).or_default();
        if let Some(client) = tx.client() {
            *clients.entry(client).or_insert(0.0) += tx.amount();
        }
    }

    regions
        .into_iter()
        .map(|(region, mut clients)| {
            if order == ClientOrder::Sorted {
                clients.sort_keys();
            }

            let clients: Vec<ClientTotal> = clients
                .into_iter()
                .map(|(client, amount)| ClientTotal {
                    client: client.to_string(),
                    amount,
                })
                .collect();
            let total = clients.iter().map(|c| c.amount).sum();

            RegionPivot {
                region: region.to_string(),
                clients,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(region: &str, client: &str, amount: f64) -> Transaction {
        Transaction::new(region, Some(client.to_string()), amount)
    }

    fn client(name: &str, amount: f64) -> ClientTotal {
        ClientTotal {
            client: name.to_string(),
            amount,
        }
    }

    #[test]
    fn totals_match_client_sums() {
        let pivots = pivot_by_region(
            &[tx("North", "A", 10.0), tx("North", "B", 20.0)],
            ClientOrder::Sorted,
        );

        assert_eq!(pivots.len(), 1);
        assert_eq!(pivots[0].clients, vec![client("A", 10.0), client("B", 20.0)]);
        assert_eq!(pivots[0].total, 30.0);
    }

    #[test]
    fn same_region_and_client_collapse_into_one_row() {
        let pivots = pivot_by_region(
            &[
                tx("North", "A", 10.0),
                tx("South", "A", 1.0),
                tx("North", "A", 5.5),
            ],
            ClientOrder::Sorted,
        );

        assert_eq!(pivots[0].region, "North");
        assert_eq!(pivots[0].clients, vec![client("A", 15.5)]);
        assert_eq!(pivots[1].region, "South");
        assert_eq!(pivots[1].clients, vec![client("A", 1.0)]);
    }

    #[test]
    fn regions_keep_first_occurrence_order() {
        let pivots = pivot_by_region(
            &[
                tx("West", "A", 1.0),
                tx("East", "A", 1.0),
                tx("West", "B", 1.0),
                tx("Central", "A", 1.0),
            ],
            ClientOrder::Sorted,
        );
        let names: Vec<_> = pivots.iter().map(|p| p.region.as_str()).collect();
        assert_eq!(names, ["West", "East", "Central"]);
    }

    #[test]
    fn client_order_is_explicit() {
        let input = [tx("North", "Zeta", 1.0), tx("North", "Alpha", 2.0)];

        let sorted = pivot_by_region(&input, ClientOrder::Sorted);
        assert_eq!(sorted[0].clients, vec![client("Alpha", 2.0), client("Zeta", 1.0)]);

        let seen = pivot_by_region(&input, ClientOrder::FirstSeen);
        assert_eq!(seen[0].clients, vec![client("Zeta", 1.0), client("Alpha", 2.0)]);
    }

    #[test]
    fn region_without_clients_has_empty_pivot() {
        let pivots = pivot_by_region(
            &[Transaction::new("Empty", None, 3.0)],
            ClientOrder::Sorted,
        );
        assert_eq!(pivots.len(), 1);
        assert!(pivots[0].clients.is_empty());
        assert_eq!(pivots[0].total, 0.0);
    }
}
