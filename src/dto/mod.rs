pub mod requisition_dto;
