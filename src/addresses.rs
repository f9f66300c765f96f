//! Address book

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ids::{AddressId, UserId};

/// Errors raised by address book operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressBookError {
    /// No saved address has this identifier.
    #[error("address {0} not found")]
    AddressNotFound(AddressId),

    /// The address belongs to a different shopper.
    #[error("address {0} belongs to another user")]
    WrongOwner(AddressId),
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAddress {
    /// Address identifier
    pub id: AddressId,

    /// When the address was saved
    pub created_at: Timestamp,

    /// Owner
    pub user_id: UserId,

    /// Short name, e.g. "Home"
    pub label: String,

    /// Recipient name
    pub full_name: String,

    /// Recipient phone number
    pub phone_number: String,

    /// Street
    pub street: String,

    /// City
    pub city: String,

    /// State
    pub state: String,

    /// Whether this is the shopper's default address
    pub is_default: bool,
}

/// The saved addresses of one shopper.
#[derive(Debug, Clone)]
pub struct AddressBook {
    user_id: UserId,
    addresses: Vec<UserAddress>,
}

impl AddressBook {
    /// Empty address book for `user_id`.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            addresses: Vec::new(),
        }
    }

    /// Owner of the address book.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Save a new address. Saving a default address clears any other default.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::WrongOwner`] if the address belongs to someone else.
    pub fn add(&mut self, address: UserAddress) -> Result<(), AddressBookError> {
        self.ensure_owner(&address)?;

        if address.is_default {
            self.clear_default();
        }

        debug!(address_id = %address.id, "saved address");

        self.addresses.push(address);

        Ok(())
    }

    /// Replace a saved address with new details.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is unknown or belongs to someone else.
    pub fn update(&mut self, address: UserAddress) -> Result<(), AddressBookError> {
        self.ensure_owner(&address)?;

        let idx = self.position(address.id)?;

        if address.is_default {
            self.clear_default();
        }

        if let Some(slot) = self.addresses.get_mut(idx) {
            *slot = address;
        }

        Ok(())
    }

    /// Delete a saved address.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::AddressNotFound`] if the address is unknown.
    pub fn remove(&mut self, address_id: AddressId) -> Result<UserAddress, AddressBookError> {
        let idx = self.position(address_id)?;

        Ok(self.addresses.remove(idx))
    }

    /// Make `address_id` the only default address.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::AddressNotFound`] if the address is unknown.
    pub fn set_default(&mut self, address_id: AddressId) -> Result<(), AddressBookError> {
        self.position(address_id)?;

        for address in &mut self.addresses {
            address.is_default = address.id == address_id;
        }

        debug!(%address_id, "set default address");

        Ok(())
    }

    /// The default address, if one is set.
    #[must_use]
    pub fn default_address(&self) -> Option<&UserAddress> {
        self.addresses.iter().find(|address| address.is_default)
    }

    /// Addresses with the default first, then newest first.
    #[must_use]
    pub fn list(&self) -> Vec<&UserAddress> {
        let mut list: Vec<&UserAddress> = self.addresses.iter().collect();

        list.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        list
    }

    /// Number of saved addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Check if no addresses are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    fn ensure_owner(&self, address: &UserAddress) -> Result<(), AddressBookError> {
        if address.user_id == self.user_id {
            Ok(())
        } else {
            Err(AddressBookError::WrongOwner(address.id))
        }
    }

    fn position(&self, address_id: AddressId) -> Result<usize, AddressBookError> {
        self.addresses
            .iter()
            .position(|address| address.id == address_id)
            .ok_or(AddressBookError::AddressNotFound(address_id))
    }

    fn clear_default(&mut self) {
        for address in &mut self.addresses {
            address.is_default = false;
        }
    }
}
