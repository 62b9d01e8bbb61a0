use anyhow::Result;
use login_form::{FormConfig, LoginResult, LoginSession, SessionStatus};

use crate::ContactArgs;

pub fn execute(
    config: FormConfig,
    contact: &ContactArgs,
    password: String,
    remember_me: bool,
) -> Result<bool> {
    let mut delivered = None;

    let errors = {
        let mut session = LoginSession::new(config, |result: LoginResult| delivered = Some(result));
        super::enter_contact(&mut session, contact)?;
        session.set_password(password)?;
        session.set_remember_me(remember_me)?;

        let status = session.submit()?;
        match status {
            SessionStatus::Closed => None,
            SessionStatus::Open => Some(session.errors().clone()),
        }
    };

    super::report(delivered, errors)
}
