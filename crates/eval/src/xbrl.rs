//! The FiNER-139 XBRL tag vocabulary.

/// The 139 XBRL taxonomy tags numeric entities are classified into.
pub const XBRL_TAGS: &[&str] = &[
    "SharebasedCompensationArrangementBySharebasedPaymentAwardAwardVestingRightsPercentage",
    "InterestExpense",
    "GoodwillImpairmentLoss",
    "SaleOfStockPricePerShare",
    "BusinessCombinationAcquisitionRelatedCosts",
    "LineOfCreditFacilityCurrentBorrowingCapacity",
    "LineOfCreditFacilityMaximumBorrowingCapacity",
    "PreferredStockSharesAuthorized",
    "RestructuringCharges",
    "IncomeLossFromEquityMethodInvestments",
    "EquityMethodInvestmentOwnershipPercentage",
    "Revenues",
    "NumberOfRealEstateProperties",
    "CumulativeEffectOfNewAccountingPrincipleInPeriodOfAdoption",
    "IncomeTaxExpenseBenefit",
    "SharebasedCompensationArrangementBySharebasedPaymentAwardExpirationPeriod",
    "DebtInstrumentFairValue",
    "AccrualForEnvironmentalLossContingencies",
    "CommonStockDividendsPerShareDeclared",
    "UnrecognizedTaxBenefitsThatWouldImpactEffectiveTaxRate",
    "Goodwill",
    "CommonStockSharesAuthorized",
    "UnrecognizedTaxBenefits",
    "LineOfCredit",
    "PublicUtilitiesRequestedRateIncreaseDecreaseAmount",
    "EquityMethodInvestments",
    "LineOfCreditFacilityUnusedCapacityCommitmentFeePercentage",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardEquityInstrumentsOtherThanOptionsVestedInPeriodTotalFairValue",
    "CommonStockCapitalSharesReservedForFutureIssuance",
    "DebtInstrumentConvertibleConversionPrice1",
    "LossContingencyPendingClaimsNumber",
    "OperatingLeasePayments",
    "LongTermDebtFairValue",
    "LeaseAndRentalExpense",
    "OperatingLeaseWeightedAverageRemainingLeaseTerm1",
    "LongTermDebt",
    "ClassOfWarrantOrRightExercisePriceOfWarrantsOrRights1",
    "DefinedContributionPlanCostRecognized",
    "LesseeOperatingLeaseTermOfContract",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardNumberOfSharesAuthorized",
    "DebtWeightedAverageInterestRate",
    "GuaranteeObligationsMaximumExposure",
    "DebtInstrumentTerm",
    "CapitalizedContractCostAmortization",
    "FiniteLivedIntangibleAssetUsefulLife",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardOptionsGrantsInPeriodGross",
    "DebtInstrumentInterestRateEffectivePercentage",
    "LettersOfCreditOutstandingAmount",
    "NumberOfOperatingSegments",
    "AllocatedShareBasedCompensationExpense",
    "CashAndCashEquivalentsFairValueDisclosure",
    "ContractWithCustomerLiabilityRevenueRecognized",
    "EmployeeServiceShareBasedCompensationTaxBenefitFromCompensationExpense",
    "LineOfCreditFacilityCommitmentFeePercentage",
    "DerivativeNotionalAmount",
    "AntidilutiveSecuritiesExcludedFromComputationOfEarningsPerShareAmount",
    "TreasuryStockAcquiredAverageCostPerShare",
    "RevenueFromRelatedParties",
    "BusinessAcquisitionPercentageOfVotingInterestsAcquired",
    "AmortizationOfIntangibleAssets",
    "BusinessCombinationRecognizedIdentifiableAssetsAcquiredAndLiabilitiesAssumedIntangibleAssetsOtherThanGoodwill",
    "ContractWithCustomerLiability",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardOptionsGrantsInPeriodWeightedAverageGrantDateFairValue",
    "AssetImpairmentCharges",
    "DebtInstrumentBasisSpreadOnVariableRate1",
    "BusinessCombinationConsiderationTransferred1",
    "DebtInstrumentUnamortizedDiscount",
    "PaymentsToAcquireBusinessesNetOfCashAcquired",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardAwardVestingPeriod1",
    "DebtInstrumentCarryingAmount",
    "AcquiredFiniteLivedIntangibleAssetsWeightedAverageUsefulLife",
    "DerivativeFixedInterestRate",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardEquityInstrumentsOtherThanOptionsGrantsInPeriod",
    "TreasuryStockValueAcquiredCostMethod",
    "OperatingLossCarryforwards",
    "DebtInstrumentMaturityDate",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardEquityInstrumentsOtherThanOptionsNonvestedNumber",
    "DefinedBenefitPlanContributionsByEmployer",
    "GainsLossesOnExtinguishmentOfDebt",
    "AreaOfRealEstateProperty",
    "BusinessAcquisitionEquityInterestsIssuedOrIssuableNumberOfSharesIssued",
    "SaleOfStockNumberOfSharesIssuedInTransaction",
    "SupplementalInformationForPropertyCasualtyInsuranceUnderwritersPriorYearClaimsAndClaimsAdjustmentExpense",
    "RevenueFromContractWithCustomerIncludingAssessedTax",
    "DeferredFinanceCostsGross",
    "NumberOfReportableSegments",
    "BusinessCombinationContingentConsiderationLiability",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardEquityInstrumentsOtherThanOptionsGrantsInPeriodWeightedAverageGrantDateFairValue",
    "RepaymentsOfDebt",
    "SharePrice",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardNumberOfSharesAvailableForGrant",
    "StockRepurchaseProgramAuthorizedAmount1",
    "LineOfCreditFacilityRemainingBorrowingCapacity",
    "PropertyPlantAndEquipmentUsefulLife",
    "ShareBasedCompensationArrangementByShareBasedPaymentAwardOptionsExercisesInPeriodTotalIntrinsicValue",
    "DisposalGroupIncludingDiscontinuedOperationConsideration",
    "DebtInstrumentRedemptionPricePercentage",
    "DebtInstrumentInterestRateStatedPercentage",
    "OperatingLeasesRentExpenseNet",
    "StockRepurchaseProgramRemainingAuthorizedRepurchaseAmount1",
    "AmortizationOfFinancingCosts",
    "ConcentrationRiskPercentage1",
    "Depreciation",
    "RevenueFromContractWithCustomerExcludingAssessedTax",
    "RelatedPartyTransactionExpensesFromTransactionsWithRelatedParty",
    "DebtInstrumentFaceAmount",
    "RestructuringAndRelatedCostExpectedCost1",
    "EmployeeServiceShareBasedCompensationNonvestedAwardsTotalCompensationCostNotYetRecognizedPeriodForRecognition1",
    "MinorityInterestOwnershipPercentageByNoncontrollingOwners",
    "CommonStockParOrStatedValuePerShare",
    "MinorityInterestOwnershipPercentageByParent",
    "CommonStockSharesOutstanding",
    "EmployeeServiceShareBasedCompensationNonvestedAwardsTotalCompensationCostNotYetRecognized",
    "DeferredFinanceCostsNet",
    "ShareBasedCompensation",
    "InterestExpenseDebt",
    "StockIssuedDuringPeriodSharesNewIssues",
    "EffectiveIncomeTaxRateContinuingOperations",
    "BusinessCombinationRecognizedIdentifiableAssetsAcquiredAndLiabilitiesAssumedIntangibles",
    "OperatingLeaseExpense",
    "PreferredStockDividendRatePercentage",
    "StockRepurchasedDuringPeriodShares",
    "OperatingLeaseCost",
    "ProceedsFromIssuanceOfCommonStock",
    "StockRepurchasedAndRetiredDuringPeriodShares",
    "RelatedPartyTransactionAmountsOfTransaction",
    "EmployeeServiceShareBasedCompensationNonvestedAwardsTotalCompensationCostNotYetRecognizedShareBasedAwardsOtherThanOptions",
    "OperatingLeaseLiability",
    "EffectiveIncomeTaxRateReconciliationAtFederalStatutoryIncomeTaxRate",
    "OperatingLeaseWeightedAverageDiscountRatePercent",
    "PaymentsToAcquireBusinessesGross",
    "LossContingencyDamagesSoughtValue",
    "TreasuryStockSharesAcquired",
    "LossContingencyAccrualAtCarryingValue",
    "RevenueRemainingPerformanceObligation",
    "LineOfCreditFacilityInterestRateAtPeriodEnd",
    "LesseeOperatingLeaseRenewalTerm",
    "OperatingLeaseRightOfUseAsset",
    "LossContingencyEstimateOfPossibleLoss",
];
