//! Unit tests for directory lookup and assignee resolution.
