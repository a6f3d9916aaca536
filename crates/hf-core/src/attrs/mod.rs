//! Attribute resolvers.
//!
//! One module per attribute family. The [`Prober`] dispatches an attribute
//! id to its resolver with the immutable display configuration and the
//! shared tool runner injected; resolving one attribute never affects
//! another, so the calls are independent and reorderable.

pub mod hardware;
pub mod identity;
pub mod network;
pub mod packages;
pub mod system;
pub mod theme;

use crate::probe::{ProbeOutcome, Runner};
use hf_common::AttributeId;
use hf_config::Config;

/// Resolves attributes against the live system.
pub struct Prober<'a> {
    config: &'a Config,
    runner: Runner,
}

impl<'a> Prober<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            runner: Runner::default(),
        }
    }

    /// Resolve a single attribute to its outcome.
    pub fn resolve(&self, id: AttributeId) -> ProbeOutcome {
        match id {
            AttributeId::Title => identity::title(),
            AttributeId::Hostname => identity::hostname(&self.runner),
            AttributeId::User => identity::user(&self.runner),
            AttributeId::Os => system::os(&self.runner),
            AttributeId::Kernel => system::kernel(&self.runner),
            AttributeId::Uptime => system::uptime(),
            AttributeId::Desktop => system::desktop(&self.runner),
            AttributeId::Shell => system::shell(&self.runner),
            AttributeId::Term => system::term(&self.runner),
            AttributeId::Packages => packages::packages(&self.runner),
            AttributeId::Host => hardware::host(&self.runner),
            AttributeId::Bios => hardware::bios(),
            AttributeId::Cpu => hardware::cpu(self.config, &self.runner),
            AttributeId::Gpu => hardware::gpu(&self.runner),
            AttributeId::Memory => hardware::memory(),
            AttributeId::GtkTheme => theme::gtk_theme(&self.runner),
            AttributeId::LocalIp => network::local_ip(),
            AttributeId::PublicIp => network::public_ip(self.config, &self.runner),
        }
    }

    /// Resolve the given attributes in order.
    pub fn resolve_report(&self, ids: &[AttributeId]) -> Vec<(AttributeId, ProbeOutcome)> {
        ids.iter().map(|&id| (id, self.resolve(id))).collect()
    }
}
