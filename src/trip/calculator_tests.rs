/*
 * Unit tests for trip module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_travel_time_sums_adjacent_pairs
 * - test_travel_time_single_floor_is_zero
 * - test_travel_time_duplicate_floors_cost_nothing
 * - test_travel_time_full_range_pair
 * - test_travel_time_symmetric_under_reversal
 * - test_travel_time_scales_with_floor_travel_time
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod calculator_tests {
    use crate::trip::travel_time;

    #[test]
    fn test_travel_time_sums_adjacent_pairs() {
        // Purpose: Verify that every adjacent pair contributes its absolute distance

        // Arrange
        let floors = vec![1, 5, 3];

        // Act
        let total_time = travel_time(&floors, 10);

        // Assert
        // |5-1| + |3-5| = 6 floors at 10 seconds each
        assert_eq!(total_time, 60);
    }

    #[test]
    fn test_travel_time_single_floor_is_zero() {
        // Purpose: Verify that a single floor has no legs and costs nothing

        // Arrange
        let floors = vec![42];

        // Act
        let total_time = travel_time(&floors, 10);

        // Assert
        assert_eq!(total_time, 0);
    }

    #[test]
    fn test_travel_time_duplicate_floors_cost_nothing() {
        // Purpose: Verify that repeated floors add zero travel time

        // Arrange
        let floors = vec![7, 7, 7];

        // Act
        let total_time = travel_time(&floors, 10);

        // Assert
        assert_eq!(total_time, 0);
    }

    #[test]
    fn test_travel_time_full_range_pair() {
        // Purpose: Verify the bottom-to-top trip of the default floor range

        // Arrange
        let floors = vec![1, 100];

        // Act
        let total_time = travel_time(&floors, 10);

        // Assert
        assert_eq!(total_time, 990);
    }

    #[test]
    fn test_travel_time_symmetric_under_reversal() {
        // Purpose: Verify that reversing a sequence does not change its travel time

        // Arrange
        let floors = vec![3, 97, 14, 2, 60];
        let mut reversed = floors.clone();
        reversed.reverse();

        // Act
        let forward_time = travel_time(&floors, 10);
        let backward_time = travel_time(&reversed, 10);

        // Assert
        assert_eq!(forward_time, backward_time);
    }

    #[test]
    fn test_travel_time_scales_with_floor_travel_time() {
        // Purpose: Verify that the configured travel time per floor scales the total

        // Arrange
        let floors = vec![1, 2];

        // Act
        let total_time = travel_time(&floors, 25);

        // Assert
        assert_eq!(total_time, 25);
    }
}
