//! Reusable UI components rendered by pages.

pub mod topic_list;
