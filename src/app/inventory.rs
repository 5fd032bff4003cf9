use crate::core::repository::Repository;
use crate::domain::model::{Boat, LocationDetail};
use crate::utils::error::Result;
use std::io::Write;

/// One aligned line of the inventory listing, without the newline.
pub fn format_inventory_line(boat: &Boat) -> String {
    let detail = match &boat.detail {
        LocationDetail::Slip(number) | LocationDetail::Storage(number) => {
            format!("# {:<3}  ", number)
        }
        LocationDetail::Land(bay) => format!("     {}   ", bay),
        LocationDetail::Trailor(tag) => format!("{:<7} ", tag),
        LocationDetail::Unknown => "Unknown ".to_string(),
    };

    format!(
        "{:<20} {:>2}'    {:<8} {}  Owes ${:>6.2}",
        boat.name,
        boat.length,
        boat.location().as_str(),
        detail,
        boat.balance
    )
}

/// Sorted by name, one boat per line.
pub fn write_inventory<W: Write>(repository: &Repository, out: &mut W) -> Result<()> {
    for boat in repository.sorted_view() {
        writeln!(out, "{}", format_inventory_line(boat))?;
    }
    Ok(())
}

pub fn inventory_json(repository: &Repository) -> Result<String> {
    Ok(serde_json::to_string_pretty(&repository.sorted_view())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_line_layout() {
        let slip = Boat::new("Eleanor", 18, LocationDetail::Slip(29), 230.0);
        assert_eq!(
            format_inventory_line(&slip),
            "Eleanor              18'    slip     # 29     Owes $230.00"
        );

        let land = Boat::new("Big Brother", 20, LocationDetail::Land('B'), 2.5);
        assert_eq!(
            format_inventory_line(&land),
            "Big Brother          20'    land          B     Owes $  2.50"
        );

        let trailer = Boat::new("Moby", 8, LocationDetail::Trailor("XY1".into()), 0.0);
        assert_eq!(
            format_inventory_line(&trailer),
            "Moby                  8'    trailor  XY1       Owes $  0.00"
        );
    }

    #[test]
    fn test_write_inventory_sorted() {
        let mut repo = Repository::default();
        repo.add(Boat::new("zephyr", 30, LocationDetail::Storage(4), 0.0))
            .unwrap();
        repo.add(Boat::new("Anchor", 30, LocationDetail::Storage(5), 0.0))
            .unwrap();

        let mut out = Vec::new();
        write_inventory(&repo, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let names: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["Anchor", "zephyr"]);
    }

    #[test]
    fn test_inventory_json() {
        let mut repo = Repository::default();
        repo.add(Boat::new("Moby", 25, LocationDetail::Trailor("MX1".into()), 7.5))
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&inventory_json(&repo).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "Moby");
        assert_eq!(json[0]["location"], "trailor");
        assert_eq!(json[0]["detail"], "MX1");
        assert_eq!(json[0]["balance"], 7.5);
    }
}
