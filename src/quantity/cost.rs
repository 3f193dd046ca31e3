quantity!(
    /// Amount in Indian rupees.
    Cost, suffix: "₹", precision: 2
);
