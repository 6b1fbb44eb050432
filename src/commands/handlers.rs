//! Command handlers.
//!
//! Each handler takes the command's arguments and the book and returns the
//! exact text to print. Failures are reported through `CommandError` inside
//! the handler and turned into their message at the boundary, so nothing
//! past this module ever sees an error.

use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use crate::repositories::{ContactBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

const ADD_USAGE: &str = "Not enough arguments. Use: add <name> <phone>";
const CHANGE_USAGE: &str = "Use: change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "Use: phone <name>";
const ALL_USAGE: &str = "Use: all";
const ADD_BIRTHDAY_USAGE: &str = "Use: add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "Use: show-birthday <name>";
const BIRTHDAYS_USAGE: &str = "Use: birthdays";

fn reply<T: Into<String>>(result: CommandResult<T>) -> String {
    match result {
        Ok(message) => message.into(),
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            e.to_string()
        }
    }
}

fn expect_args(args: &[String], count: usize, usage: &'static str) -> CommandResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn summaries<'a>(records: impl IntoIterator<Item = &'a ContactRecord>) -> String {
    records
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add <name> <phone> [<phone> ...]`
///
/// Creates the contact if needed, then adds every phone in order. The first
/// invalid phone stops the command; phones added before it stay added.
pub fn add_contact(args: &[String], book: &mut ContactBook) -> String {
    reply(try_add_contact(args, book))
}

fn try_add_contact(args: &[String], book: &mut ContactBook) -> CommandResult<&'static str> {
    let [name, phones @ ..] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    if phones.is_empty() {
        return Err(CommandError::Usage(ADD_USAGE));
    }

    let (record, created) = book.find_or_insert(name);
    let message = if created {
        "Contact added."
    } else {
        "Contact updated."
    };

    for phone in phones {
        record.add_phone(phone)?;
    }
    Ok(message)
}

/// `change <name> <old phone> <new phone>`
///
/// Replies "Contact updated." even when the record does not hold the old
/// phone; the record is left unchanged in that case.
pub fn change_contact(args: &[String], book: &mut ContactBook) -> String {
    reply(try_change_contact(args, book))
}

fn try_change_contact(args: &[String], book: &mut ContactBook) -> CommandResult<&'static str> {
    expect_args(args, 3, CHANGE_USAGE)?;
    let (name, old_phone, new_phone) = (&args[0], &args[1], &args[2]);

    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;
    if !record.edit_phone(old_phone, new_phone)? {
        tracing::debug!(name = %name, phone = %old_phone, "Old phone not on record");
    }
    Ok("Contact updated.")
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &ContactBook) -> String {
    reply(try_show_phone(args, book))
}

fn try_show_phone(args: &[String], book: &ContactBook) -> CommandResult<String> {
    expect_args(args, 1, PHONE_USAGE)?;
    let record = book.find(&args[0]).ok_or(CommandError::NotFound)?;
    Ok(record.phones_display())
}

/// `all`
pub fn list_contacts(args: &[String], book: &ContactBook) -> String {
    reply(try_list_contacts(args, book))
}

fn try_list_contacts(args: &[String], book: &ContactBook) -> CommandResult<String> {
    expect_args(args, 0, ALL_USAGE)?;
    if book.is_empty() {
        return Ok("Contacts are empty.".to_string());
    }
    Ok(summaries(book))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut ContactBook) -> String {
    reply(try_add_birthday(args, book))
}

fn try_add_birthday(args: &[String], book: &mut ContactBook) -> CommandResult<&'static str> {
    expect_args(args, 2, ADD_BIRTHDAY_USAGE)?;
    let record = book.find_mut(&args[0]).ok_or(CommandError::NotFound)?;
    record.set_birthday(&args[1])?;
    Ok("Birthday added.")
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &ContactBook) -> String {
    reply(try_show_birthday(args, book))
}

fn try_show_birthday(args: &[String], book: &ContactBook) -> CommandResult<String> {
    expect_args(args, 1, SHOW_BIRTHDAY_USAGE)?;
    let record = book.find(&args[0]).ok_or(CommandError::NotFound)?;
    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday is on {}", record.name(), birthday),
        None => "Birthday not set.".to_string(),
    })
}

/// `birthdays`, looking 7 days ahead from the local date.
pub fn birthdays(args: &[String], book: &ContactBook) -> String {
    upcoming_birthdays(
        args,
        book,
        Local::now().date_naive(),
        DEFAULT_BIRTHDAY_WINDOW_DAYS,
    )
}

/// `birthdays` with an explicit reference date and window.
pub fn upcoming_birthdays(
    args: &[String],
    book: &ContactBook,
    today: NaiveDate,
    window_days: u32,
) -> String {
    reply(try_upcoming_birthdays(args, book, today, window_days))
}

fn try_upcoming_birthdays(
    args: &[String],
    book: &ContactBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<String> {
    expect_args(args, 0, BIRTHDAYS_USAGE)?;
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(summaries(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut book = ContactBook::new();
        assert_eq!(
            add_contact(&args(&["Alice", "0501234567"]), &mut book),
            "Contact added."
        );
        assert_eq!(
            add_contact(&args(&["Alice", "0509999999"]), &mut book),
            "Contact updated."
        );
        assert_eq!(book.len(), 1);
        assert_eq!(
            show_phone(&args(&["Alice"]), &book),
            "0501234567; 0509999999"
        );
    }

    #[test]
    fn test_add_contact_with_several_phones() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "0501234567", "0671234567"]), &mut book);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_requires_name_and_phone() {
        let mut book = ContactBook::new();
        assert_eq!(add_contact(&args(&[]), &mut book), ADD_USAGE);
        assert_eq!(add_contact(&args(&["Alice"]), &mut book), ADD_USAGE);
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_stops_at_first_invalid_phone() {
        let mut book = ContactBook::new();
        let reply = add_contact(
            &args(&["Alice", "0501234567", "12", "0671234567"]),
            &mut book,
        );
        assert_eq!(reply, "Phone number must contain exactly 10 digits.");

        let record = book.find("Alice").unwrap();
        assert_eq!(record.phones_display(), "0501234567");
    }

    #[test]
    fn test_add_contact_with_invalid_phone_still_creates_record() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "bad"]), &mut book);
        assert!(book.find("Alice").unwrap().phones().is_empty());
    }

    #[test]
    fn test_change_contact() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "0501234567", "0509999999"]), &mut book);

        assert_eq!(
            change_contact(&args(&["Alice", "0501234567", "0931112233"]), &mut book),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book),
            "0509999999; 0931112233"
        );
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = ContactBook::new();
        let before = book.clone();
        assert_eq!(
            change_contact(&args(&["Nobody", "123", "4567890123"]), &mut book),
            "Contact not found."
        );
        assert_eq!(book, before);
    }

    #[test]
    fn test_change_contact_unknown_old_phone_reports_update() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "0501234567"]), &mut book);
        assert_eq!(
            change_contact(&args(&["Alice", "0000000000", "0931112233"]), &mut book),
            "Contact updated."
        );
        assert_eq!(show_phone(&args(&["Alice"]), &book), "0501234567");
    }

    #[test]
    fn test_change_contact_invalid_new_phone() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "0501234567"]), &mut book);
        assert_eq!(
            change_contact(&args(&["Alice", "0501234567", "12"]), &mut book),
            "Phone number must contain exactly 10 digits."
        );
        assert_eq!(show_phone(&args(&["Alice"]), &book), "0501234567");
    }

    #[test]
    fn test_change_contact_argument_count() {
        let mut book = ContactBook::new();
        assert_eq!(change_contact(&args(&["Alice"]), &mut book), CHANGE_USAGE);
        assert_eq!(
            change_contact(&args(&["a", "b", "c", "d"]), &mut book),
            CHANGE_USAGE
        );
    }

    #[test]
    fn test_show_phone_errors() {
        let book = ContactBook::new();
        assert_eq!(show_phone(&args(&["Nobody"]), &book), "Contact not found.");
        assert_eq!(show_phone(&args(&[]), &book), PHONE_USAGE);
    }

    #[test]
    fn test_list_contacts() {
        let mut book = ContactBook::new();
        assert_eq!(list_contacts(&args(&[]), &book), "Contacts are empty.");

        add_contact(&args(&["Alice", "0501234567"]), &mut book);
        assert_eq!(
            list_contacts(&args(&[]), &book),
            "Contact name: Alice, phones: 0501234567, birthday: N/A"
        );

        add_contact(&args(&["Bob", "0671234567"]), &mut book);
        add_birthday(&args(&["Bob", "01.01.2000"]), &mut book);
        assert_eq!(
            list_contacts(&args(&[]), &book),
            "Contact name: Alice, phones: 0501234567, birthday: N/A\n\
             Contact name: Bob, phones: 0671234567, birthday: 01.01.2000"
        );
    }

    #[test]
    fn test_list_contacts_rejects_arguments() {
        let book = ContactBook::new();
        assert_eq!(list_contacts(&args(&["extra"]), &book), ALL_USAGE);
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Bob", "0671234567"]), &mut book);

        assert_eq!(show_birthday(&args(&["Bob"]), &book), "Birthday not set.");
        assert_eq!(
            add_birthday(&args(&["Bob", "01.01.2000"]), &mut book),
            "Birthday added."
        );
        assert_eq!(
            show_birthday(&args(&["Bob"]), &book),
            "Bob's birthday is on 01.01.2000"
        );
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = ContactBook::new();
        assert_eq!(
            add_birthday(&args(&["Bob", "01.01.2000"]), &mut book),
            "Contact not found."
        );

        add_contact(&args(&["Bob", "0671234567"]), &mut book);
        assert_eq!(
            add_birthday(&args(&["Bob", "2000-01-01"]), &mut book),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(add_birthday(&args(&["Bob"]), &mut book), ADD_BIRTHDAY_USAGE);
        assert!(book.find("Bob").unwrap().birthday().is_none());
    }

    #[test]
    fn test_show_birthday_errors() {
        let book = ContactBook::new();
        assert_eq!(show_birthday(&args(&["Bob"]), &book), "Contact not found.");
        assert_eq!(
            show_birthday(&args(&["Bob", "Alice"]), &book),
            SHOW_BIRTHDAY_USAGE
        );
    }

    #[test]
    fn test_upcoming_birthdays_across_new_year() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Bob", "0671234567"]), &mut book);
        add_birthday(&args(&["Bob", "01.01.2000"]), &mut book);

        assert_eq!(
            upcoming_birthdays(&args(&[]), &book, date(2023, 12, 31), 7),
            "Contact name: Bob, phones: 0671234567, birthday: 01.01.2000"
        );
    }

    #[test]
    fn test_upcoming_birthdays_none() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Bob", "0671234567"]), &mut book);
        add_birthday(&args(&["Bob", "01.01.2000"]), &mut book);

        assert_eq!(
            upcoming_birthdays(&args(&[]), &book, date(2023, 6, 1), 7),
            "No upcoming birthdays."
        );
    }

    #[test]
    fn test_birthdays_rejects_arguments() {
        let book = ContactBook::new();
        assert_eq!(birthdays(&args(&["7"]), &book), BIRTHDAYS_USAGE);
        assert_eq!(birthdays(&args(&[]), &book), "No upcoming birthdays.");
    }
}
