mod excel;
mod sheet;

pub use excel::read_workbook;
pub use sheet::{build_vendor_sheet, VendorSheet};
