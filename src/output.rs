use crate::bank::{
    account::{Account, AccountType},
    Amount,
};

use serde::Serialize;

#[derive(Serialize)]
struct StatementRecord<'a> {
    id: &'a str,
    holder: &'a str,
    kind: AccountType,
    balance: Amount,
}

impl<'a> StatementRecord<'a> {
    fn new(acc: &'a Account) -> Self {
        let mut balance = acc.balance();
        balance.rescale(2);

        Self {
            id: acc.id(),
            holder: acc.holder(),
            kind: acc.account_type(),
            balance,
        }
    }
}

// Writes one CSV record per account to the given stream.
pub fn write_statement<'a>(
    output_stream: impl std::io::Write,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for account in accounts {
        writer.serialize(StatementRecord::new(account))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod write_tests {
    use super::write_statement;
    use crate::bank::account::Account;

    use rust_decimal_macros::dec;

    #[test]
    fn test_write_statement() {
        let accounts = vec![
            Account::savings("S123", "John Doe", dec!(1200), dec!(0.02)),
            Account::current("C456", "Jane Doe", dec!(-12.5), dec!(500)),
            Account::basic("B789", "Doe, Jim", dec!(0.25)),
        ];

        let mut buf = Vec::new();
        write_statement(&mut buf, &accounts).expect("writing to a Vec should not fail");

        assert_eq!(
            r#"id,holder,kind,balance
S123,John Doe,savings,1200.00
C456,Jane Doe,current,-12.50
B789,"Doe, Jim",basic,0.25
"#,
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_write_statement_empty() {
        let mut buf = Vec::new();
        write_statement(&mut buf, &Vec::<Account>::new()).expect("writing to a Vec should not fail");

        assert_eq!("", String::from_utf8(buf).unwrap());
    }
}
