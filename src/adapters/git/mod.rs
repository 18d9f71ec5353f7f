mod git2_identity;

pub use git2_identity::Git2Identity;
