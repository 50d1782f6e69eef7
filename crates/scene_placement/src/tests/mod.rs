//! Cross-module placement scenarios
