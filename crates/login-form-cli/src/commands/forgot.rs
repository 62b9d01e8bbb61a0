use anyhow::Result;
use login_form::{FormConfig, LoginResult, LoginSession, SessionStatus};

use crate::ContactArgs;

pub fn execute(config: FormConfig, contact: &ContactArgs) -> Result<bool> {
    let mut delivered = None;

    let errors = {
        let mut session = LoginSession::new(config, |result: LoginResult| delivered = Some(result));
        super::enter_contact(&mut session, contact)?;

        let status = session.forgot_password()?;
        match status {
            SessionStatus::Closed => None,
            SessionStatus::Open => Some(session.errors().clone()),
        }
    };

    super::report(delivered, errors)
}
