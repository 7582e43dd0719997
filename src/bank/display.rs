use super::account::Account;

/// Full description of an account, whatever its kind.
pub fn format_account(account: &Account) -> String {
    account.describe()
}

// Writes the description of the account to the given stream.
pub fn display(mut output_stream: impl std::io::Write, account: &Account) -> std::io::Result<()> {
    output_stream.write_all(format_account(account).as_bytes())
}
