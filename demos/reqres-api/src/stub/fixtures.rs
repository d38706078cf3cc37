//! The reqres fixture data.

use crate::models::{ColorEntry, SupportInfo, UserRecord};

/// Number of entries per page in listings.
pub const PER_PAGE: usize = 6;

/// First id assigned to a created user.
pub const FIRST_CREATED_ID: u64 = 100;

/// Error of a registration outside the defined users.
pub const UNDEFINED_USER_ERROR: &str = "Note: Only defined users succeed registration";

const USERS: [(u32, &str, &str); 12] = [
    (1, "George", "Bluth"),
    (2, "Janet", "Weaver"),
    (3, "Emma", "Wong"),
    (4, "Eve", "Holt"),
    (5, "Charles", "Morris"),
    (6, "Tracey", "Ramos"),
    (7, "Michael", "Lawson"),
    (8, "Lindsay", "Ferguson"),
    (9, "Tobias", "Funke"),
    (10, "Byron", "Fields"),
    (11, "George", "Edwards"),
    (12, "Rachel", "Howell"),
];

const COLORS: [(u32, &str, u16, &str, &str); 12] = [
    (1, "cerulean", 2000, "#98B2D1", "15-4020"),
    (2, "fuchsia rose", 2001, "#C74375", "17-2031"),
    (3, "true red", 2002, "#BF1932", "19-1664"),
    (4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
    (5, "tigerlily", 2004, "#E2583E", "17-1456"),
    (6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
    (7, "sand dollar", 2006, "#DECDBE", "13-1106"),
    (8, "chili pepper", 2007, "#9B1B30", "19-1557"),
    (9, "blue iris", 2008, "#5A5B9F", "18-3943"),
    (10, "mimosa", 2009, "#F0C05A", "14-0848"),
    (11, "turquoise", 2010, "#45B5AA", "15-5519"),
    (12, "honeysuckle", 2011, "#D94F70", "18-2120"),
];

pub fn users() -> Vec<UserRecord> {
    USERS
        .iter()
        .map(|&(id, first_name, last_name)| UserRecord {
            id,
            email: format!(
                "{}.{}@reqres.in",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        })
        .collect()
}

pub fn colors() -> Vec<ColorEntry> {
    COLORS
        .iter()
        .map(|&(id, name, year, color, pantone_value)| ColorEntry {
            id,
            name: name.to_string(),
            year,
            color: color.to_string(),
            pantone_value: pantone_value.to_string(),
        })
        .collect()
}

pub fn support() -> SupportInfo {
    SupportInfo {
        url: "https://reqres.in/#support-heading".to_string(),
        text: "To keep ReqRes free, contributions towards server costs are appreciated!"
            .to_string(),
    }
}

/// The token handed to a registered user.
pub fn token(id: u32) -> String {
    format!("QpwL5tke4Pnpja7X{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_user_emails() {
        let users = users();

        let emma = users.iter().find(|user| user.id == 3).expect("user 3");
        assert_eq!(emma.email, "emma.wong@reqres.in");
        assert_eq!(users.len(), 12);
    }

    #[test]
    fn sixth_color_should_be_blue_turquoise() {
        let colors = colors();

        let sixth = colors.get(5).expect("six colors");
        assert_eq!(sixth.name, "blue turquoise");
        assert_eq!(sixth.year, 2005);
    }
}
