//! Hint messages returned by the quiz endpoints.
//!
//! Flag tokens take the form `ITMC{<step>. <answer>}`; the step numbers follow the
//! order the hints suggest, although no endpoint checks that order.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub const ROOT_INFO: &str = "This URL is for backend setup only. Create new data with the username (your surname) and a password (not real password) as a request body with /signup as an endpoint to get the answer in number 1. The answer format is ITMC{answer}.";

pub const LOGIN_MISSING_AUTH_KEY: &str = "ITMC{3. No trespassing!} Ooppsss, logging in is not authorized. May be you need to add one more request body? How about authentication key? Is it Authkey, authentication_key, or authKey?";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub const INVALID_AUTH_KEY: &str = "Invalid authentication key";

pub const EMPTY_UPDATE: &str = "At least one field to update is required";

pub const INVALID_ROLE: &str = "Invalid role!";

pub const USER_UPDATED: &str = "User updated successfully";

pub const USER_NOT_FOUND: &str = "User not found";

pub const OWNER_NOT_FOUND: &str = "Owner not found";

pub const PET_FIELDS_REQUIRED: &str = "ownerId, name, type required";

pub const OWNER_PETS: &str =
    "ITMC{7. Wow Ang Galing!}. Now, can you try fetching all pets in /pets endpoint?";

pub const PETS_REQUIRE_USER_ID: &str = "userId query required. But how??? Did your instructor even tell you this? I bet he didn’t, because he forgot. Just add this ?userId=YOUR_USER_ID_VALUE in url.";

pub const PETS_FORBIDDEN: &str = "ITMC{8. Uh oh}. Of course you cant! You are not authorized. Maybe retrieve your data first to see what is your role? Then may be, may be if you change that role you can view all pets.";

pub const ALL_PETS: &str = "ITMC{10. All_pets_listed_successfully}. You changed the role???? What are you??? Okay you're good! Now retrieve how many pets are there in stats/pets/count endpoint";

pub const USER_PROFILE: &str =
    "What do you think is the role that can view all pets? vet? admin? faculty? or backend?";

pub const NO_USERS: &str = "No users found";

pub fn signup_missing_fields(password: &str) -> String {
    format!(
        "ITMC{{1. {password}}} Uh oh, your instructor must be lying to you. May be you should add more request body? Age is required."
    )
}

pub fn signup_created(code: &str) -> String {
    format!(
        "ITMC{{2. {code}}} To proceed to number 2, login using your username and password in endpoint /login. Save your 6 character code and ID, you WILL be needing this in other steps. I wont be showing it in queries anymore."
    )
}

pub fn login_success(scrambled_code: &str) -> String {
    format!(
        "ITMC{{4. {scrambled_code}}} Congrats! Now, can you edit your username in /users? Take note that you need to search for specific data before editing the username, so /users might not be the correct endpoint. Maybe you can add something more than that?"
    )
}

pub fn username_updated(username: &str, scrambled_code: &str) -> String {
    format!(
        "Wow! Congrats! You successfully edited your username! ITMC{{5. {username}_{scrambled_code}}}. Now, do you have a pet? If yes, add a pet using the Add button… Oh, there’s no Add button to save you here? Maybe send a request to the endpoint /pets/new."
    )
}

pub fn role_updated(role: &str) -> String {
    format!("ITMC{{9.You changed your role to {role}. Are you trying to become a hacker???}}")
}

pub fn pet_created(name: &str) -> String {
    format!(
        "ITMC{{6. {name}}} To view your pet, go to an endpoint users/YOUR PRIMARY KEY/pets. Also SAVE your pet_id."
    )
}

pub fn pet_count(count: u64, stamp: &Stamp) -> String {
    format!(
        "ITMC{{11. pet_count:{count}_date:{}_time:{}}}. Good job, can you delete your pet to proceed with number 12? The endpoint? Take a guess — there are plenty of clues.",
        stamp.date, stamp.time
    )
}

pub fn delete_refused(pet_id: &str) -> String {
    format!(
        "Cannot delete pets due to API restrictions. ITMC{{12. NiceTry! {pet_id}}}. I am intrigued… who do you think is the oldest and the youngest here? Want to know? Then check it in /stats/users/ages."
    )
}

pub fn age_extremes<S: AsRef<str>>(
    oldest: &[S],
    max_age: i32,
    youngest: &[S],
    min_age: i32,
) -> String {
    format!(
        "ITMC{{13. oldest:[{}]_{max_age}_youngest:[{}]_{min_age}}} Nice work! Now, can you check how many users exist in /stats/users/count?",
        join_names(oldest),
        join_names(youngest)
    )
}

pub fn user_count(count: u64, stamp: &Stamp) -> String {
    format!(
        "ITMC{{14. users:{count}_date:{}_time:{}}} Almost done! One last step… log out at /logout.",
        stamp.date, stamp.time
    )
}

pub fn logged_out(code: &str) -> String {
    format!("ITMC{{15. {code}_logged_out_successfully}} Congratulations, you completed the exam!")
}

fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

/// Date and time rendered the way the `en-PH` locale prints them: `M/D/YYYY` and
/// `h:mm:ss AM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub date: String,
    pub time: String,
}

impl Stamp {
    pub fn now() -> Self {
        Self::from_datetime(&chrono::Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            date: now.format("%-m/%-d/%Y").to_string(),
            time: now.format("%-I:%M:%S %p").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    #[test]
    fn flag_embeds_the_answer() {
        assert!(signup_created("AB12CD").starts_with("ITMC{2. AB12CD}"));
        assert!(logged_out("ZZ9999").starts_with("ITMC{15. ZZ9999_logged_out_successfully}"));
        assert_eq!(
            role_updated("admin"),
            "ITMC{9.You changed your role to admin. Are you trying to become a hacker???}"
        );
    }

    #[test]
    fn username_flag_joins_name_and_code() {
        assert!(username_updated("dela_cruz", "C1B2A3").contains("ITMC{5. dela_cruz_C1B2A3}"));
    }

    #[test]
    fn age_flag_lists_every_member_of_each_group() {
        let message = age_extremes(&["C"], 30, &["A", "B"], 20);
        assert!(message.starts_with("ITMC{13. oldest:[C]_30_youngest:[A,B]_20}"));
    }

    #[test]
    fn stamp_matches_philippine_locale_layout() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|d| d.and_hms_opt(15, 4, 5))
            .map(|naive| naive.and_utc())
            .unwrap();
        let stamp = Stamp::from_datetime(&at.with_timezone(&Utc));
        assert_eq!(stamp.date, "3/7/2026");
        assert_eq!(stamp.time, "3:04:05 PM");
    }

    #[test]
    fn stamp_renders_midnight_as_twelve_am() {
        let at = NaiveDate::from_ymd_opt(2026, 12, 31)
            .and_then(|d| d.and_hms_opt(0, 0, 9))
            .map(|naive| naive.and_utc())
            .unwrap();
        let stamp = Stamp::from_datetime(&at);
        assert_eq!(stamp.date, "12/31/2026");
        assert_eq!(stamp.time, "12:00:09 AM");
    }

    #[test]
    fn counts_are_embedded_with_stamp() {
        let stamp = Stamp {
            date: "1/2/2026".into(),
            time: "9:00:00 AM".into(),
        };
        assert!(
            pet_count(4, &stamp)
                .starts_with("ITMC{11. pet_count:4_date:1/2/2026_time:9:00:00 AM}")
        );
        assert!(
            user_count(2, &stamp).starts_with("ITMC{14. users:2_date:1/2/2026_time:9:00:00 AM}")
        );
    }
}
