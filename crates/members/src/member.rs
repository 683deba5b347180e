use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, MemberId, Money};

/// A member account: identity, username, spendable balance.
///
/// Balance mutation happens only through `debit`/`credit`; both are
/// all-or-nothing (a failed debit leaves the balance untouched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    username: String,
    balance: Money,
}

impl Member {
    pub fn new(id: MemberId, username: impl Into<String>, balance: Money) -> DomainResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::validation("username must not be blank"));
        }
        Ok(Self {
            id,
            username,
            balance,
        })
    }

    pub fn id_typed(&self) -> MemberId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Charge `amount` against the balance.
    ///
    /// Fails with `DomainError::InsufficientFunds` when the balance cannot
    /// cover the amount, leaving the balance unchanged.
    pub fn debit(&mut self, amount: Money) -> DomainResult<()> {
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    pub fn credit(&mut self, amount: Money) -> DomainResult<()> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
