//! Search EC2 instances by a tag/filter pattern and print matches as a
//! bordered table or a delimited list of private IPs.

pub mod cli;
pub mod ec2;
pub mod error;
pub mod extract;
pub mod output;
