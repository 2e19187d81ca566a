pub mod list;
pub use list::c_list as other_c_list;
pub use list::list as other_list;
#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {


    }
}
