//! Scenario data model — the full set of user-entered choices driving
//! graph construction and export.

pub mod types;

pub use types::{
    BuyingChannels, Category, ChannelRow, LogicType, Scenario, Scope, Stream2, StrategicOwner,
    SupplierPool, SupplierRow, SupplierType, SupplierTypeFilter, TacticalAction, TenderRequired,
};
