pub mod d001_partner_dashboard;
